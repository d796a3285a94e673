use serde::de::DeserializeOwned;

pub trait Endpoint {
    type Response: DeserializeOwned;

    /// Path relative to the API base URL, with path parameters filled in.
    fn path(&self) -> String;

    fn query(&self) -> Vec<(&'static str, String)>;
}
