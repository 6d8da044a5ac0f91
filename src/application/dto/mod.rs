//! # Data Transfer Objects
//!
//! 層の境界を越えて渡される設定・データ構造

pub mod detect_config;
