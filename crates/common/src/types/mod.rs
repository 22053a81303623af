use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    /// Whether the content store finished loading its snapshot.
    pub ready: bool,
}
