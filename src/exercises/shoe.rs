//! Shoe catalogue entries.

use std::fmt;

use tracing::debug;

use crate::errors::Errors;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Brand {
    Adidas,
    Nike,
    Zara,
    Taobao,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShoeColor {
    Black,
    Brown,
    White,
    Pastel,
    Neutral,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Sneaker,
    Boot,
    Loafer,
    Dress,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Brand::Adidas => "Adidas",
            Brand::Nike => "Nike",
            Brand::Zara => "Zara",
            Brand::Taobao => "Taobao",
        })
    }
}

impl fmt::Display for ShoeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShoeColor::Black => "Black",
            ShoeColor::Brown => "Brown",
            ShoeColor::White => "White",
            ShoeColor::Pastel => "Pastel",
            ShoeColor::Neutral => "Neutral",
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Sneaker => "Sneaker",
            Kind::Boot => "Boot",
            Kind::Loafer => "Loafer",
            Kind::Dress => "Dress",
        })
    }
}

/// An immutable shoe: brand, color, kind and size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shoe {
    brand: Brand,
    color: ShoeColor,
    kind: Kind,
    size: f64,
}

impl Shoe {
    /// # Errors
    ///
    /// * `Errors::UnsupportedShoe` for Nike dress shoes, which Nike does not sell.
    pub fn new(brand: Brand, color: ShoeColor, kind: Kind, size: f64) -> Result<Self, Errors> {
        if brand == Brand::Nike && kind == Kind::Dress {
            debug!(?brand, ?kind, "rejected unsupported shoe");
            return Err(Errors::UnsupportedShoe((brand, kind)));
        }
        Ok(Self {
            brand,
            color,
            kind,
            size,
        })
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn color(&self) -> ShoeColor {
        self.color
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing ".0" on whole sizes
        write!(
            f,
            "Shoe{{brand={}, color={}, kind={}, size={:?}}}",
            self.brand, self.color, self.kind, self.size
        )
    }
}
