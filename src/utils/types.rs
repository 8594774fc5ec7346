/// Alias to a scalar floating type.
///
/// NOTE: `f64` is used everywhere in the pipeline: switching to `f32` loses precision on
/// coordinate arithmetic without a measurable performance win at this problem scale.
pub type Float = f64;
