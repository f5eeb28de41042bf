//! Chart scene and canvas rendering for the market size calculator.
//!
//! The chart is first described as a [`scene::Scene`]: plain data listing the
//! circles, labels, legend rows and title, independent of any renderer. The
//! client renders the circles and labels as SVG for the live view, and uses
//! [`render::draw`] to paint the whole scene onto a 2D canvas when the
//! visualization is exported as an image.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Renderer-independent chart description and export layout |
//! | [`render`] | Paints a scene onto a `CanvasRenderingContext2d` |
//! | [`consts`] | Chart geometry, colors and font sizes |

pub mod consts;
pub mod render;
pub mod scene;
