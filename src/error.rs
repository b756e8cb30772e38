use thiserror::Error;

/// Errors returned by graph mutation.
///
/// Vertex ids are stored in their `Debug` form, so the error type does not
/// carry the graph's vertex type parameter.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} already exists; add it with overwrite to replace it")]
    VertexExists { vertex: String },

    #[error("vertex {vertex} does not exist in the graph")]
    MissingVertex { vertex: String },

    #[error("edge from vertex {vertex} to itself is not allowed")]
    SelfLoop { vertex: String },
}

impl GraphError {
    pub(crate) fn vertex_exists<V: core::fmt::Debug>(v: &V) -> Self {
        GraphError::VertexExists {
            vertex: format!("{:?}", v),
        }
    }

    pub(crate) fn missing_vertex<V: core::fmt::Debug>(v: &V) -> Self {
        GraphError::MissingVertex {
            vertex: format!("{:?}", v),
        }
    }

    pub(crate) fn self_loop<V: core::fmt::Debug>(v: &V) -> Self {
        GraphError::SelfLoop {
            vertex: format!("{:?}", v),
        }
    }
}

pub type Result<T> = core::result::Result<T, GraphError>;
