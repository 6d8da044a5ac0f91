//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod fs_image_repository;
