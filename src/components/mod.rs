//! The components module contains the product image and the widgets it composes.

pub mod css;

mod badges;
mod icons;
mod image_placeholder;
mod product_image;
mod shelf;

pub use badges::*;
pub use icons::*;
pub use image_placeholder::*;
pub use product_image::*;
pub use shelf::*;
