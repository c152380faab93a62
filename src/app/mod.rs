// Application layer - Use case interactors

pub mod container;
pub mod fetch_interactor;
pub mod render_interactor;
pub mod visual_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use fetch_interactor::MediaFetcher;
pub use render_interactor::{InputOrigin, PipelinePorts, RenderInteractor};
pub use visual_interactor::VisualResolver;
