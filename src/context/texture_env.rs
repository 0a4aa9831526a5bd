//! Fixed-function texture environment descriptions.

use crate::color::Color;

/// Combiner operation for one channel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombineOp {
    /// `arg0`
    Replace,
    /// `arg0 * arg1`
    Modulate,
    /// `arg0 * arg2 + arg1 * (1 - arg2)`
    Interpolate,
}

/// Where a combiner argument is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombineSource {
    /// The texture bound to the unit.
    Texture,
    /// The interpolated primary color.
    PrimaryColor,
    /// The environment constant color.
    Constant,
}

/// Which part of a combiner argument is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombineOperand {
    /// The RGB channels.
    SrcColor,
    /// The alpha channel.
    SrcAlpha,
}

/// A three-argument texture combiner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combiner {
    /// Operation applied to the RGB channels.
    pub rgb_op: CombineOp,
    /// RGB arguments, in order.
    pub rgb_args: [(CombineSource, CombineOperand); 3],
    /// Operation applied to the alpha channel.
    pub alpha_op: CombineOp,
    /// Alpha argument 0.
    pub alpha_arg: (CombineSource, CombineOperand),
    /// Environment constant color.
    pub constant: Color,
}

impl Combiner {
    /// The body-paint combiner.
    ///
    /// RGB blends the texture over the flat paint color weighted by the texture
    /// alpha; alpha is forced to the opaque constant.
    pub fn paint() -> Self {
        Combiner {
            rgb_op: CombineOp::Interpolate,
            rgb_args: [
                (CombineSource::Texture, CombineOperand::SrcColor),
                (CombineSource::PrimaryColor, CombineOperand::SrcColor),
                (CombineSource::Texture, CombineOperand::SrcAlpha),
            ],
            alpha_op: CombineOp::Replace,
            alpha_arg: (CombineSource::Constant, CombineOperand::SrcAlpha),
            constant: Color::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Texture environment of a texture unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureEnv {
    /// Multiply the texture by the flat color.
    Modulate,
    /// Use a programmable combiner.
    Combine(Combiner),
}
