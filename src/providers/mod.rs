pub mod assets_api;

pub use assets_api::AssetsApiProvider;
