pub mod sampler;
pub mod seed;

pub use sampler::{Sampler, sample_square_with};
pub use seed::events::SeedChangedEvent;
pub use seed::plugin::SeedPlugin;
pub use seed::resource::SeedResource;
