//! pv-scene: the scene document format.
//!
//! A scene is a JSON object with a `components` array; each entry dispatches
//! on its `type` tag. Loading is all-or-nothing: one bad entry rejects the
//! whole document with an error naming the offending component. Writing uses
//! a compact formatter that keeps coordinate pairs, colors, and small flat
//! objects on one line so documents stay hand-editable.

pub mod loader;
pub mod scene;
pub mod writer;

pub use loader::parse;
pub use scene::Scene;
pub use writer::serialize;

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// The document is not valid JSON or not shaped like a scene.
    #[error("Invalid scene document: {0}")]
    Format(String),

    #[error("Unknown component type: {tag}")]
    UnknownComponentType { tag: String },

    /// A component entry failed to load; `component` is its id or, for
    /// anonymous entries, its array index.
    #[error("Invalid component {component}: {message}")]
    Field { component: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read and parse a scene file.
pub fn load_file(path: &std::path::Path) -> SceneResult<Scene> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Write a scene file in the compact document format.
pub fn save_file(path: &std::path::Path, scene: &Scene) -> SceneResult<()> {
    let text = serialize(scene)?;
    std::fs::write(path, text)?;
    Ok(())
}
