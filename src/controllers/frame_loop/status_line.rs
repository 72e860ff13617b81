use crate::core::fractals::fractal::Fractal;
use crate::core::navigation::viewport::Viewport;

#[must_use]
pub fn status_line(viewport: &Viewport, fractal: &Fractal) -> String {
    match fractal.julia_constant() {
        Some(constant) => format!(
            "Pan Speed: {:.6}  Julia C: {:.6}",
            viewport.pan_speed, constant
        ),
        None => format!("Pan Speed: {:.6}", viewport.pan_speed),
    }
}
