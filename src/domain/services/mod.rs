//! # Domain Services
//!
//! 純粋なビジネスルール（I/Oなし）

pub mod display_url;
