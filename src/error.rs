//! Error types.
//!
//! OS failures carry the raw error code (`GetLastError` / `HRESULT`) as a
//! `u32` so the types stay usable on hosts without the Win32 backend.

use std::fmt;

use thiserror::Error;

use crate::border::Edge;

pub type Result<T> = std::result::Result<T, Error>;

/// The platform call that failed while building an overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceStep {
    CreateWindow,
    ScreenDc,
    MemoryDc,
    Bitmap,
    SelectBitmap,
    Brush,
    Fill,
    UpdateLayered,
}

impl fmt::Display for SurfaceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceStep::CreateWindow => "CreateWindowExW",
            SurfaceStep::ScreenDc => "GetDC",
            SurfaceStep::MemoryDc => "CreateCompatibleDC",
            SurfaceStep::Bitmap => "CreateCompatibleBitmap",
            SurfaceStep::SelectBitmap => "SelectObject",
            SurfaceStep::Brush => "CreateSolidBrush",
            SurfaceStep::Fill => "FillRect",
            SurfaceStep::UpdateLayered => "UpdateLayeredWindow",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to register window class {class:?} (os error {code})")]
    ClassRegistration { class: String, code: u32 },

    #[error("overlay creation failed at {step} (os error {code})")]
    SurfaceCreation { step: SurfaceStep, code: u32 },

    #[error("could not create {edge} border: {source}")]
    BorderSetCreation {
        edge: Edge,
        #[source]
        source: Box<Error>,
    },

    #[error("startup failed: {0}")]
    Startup(String),
}

impl Error {
    /// True for errors that must terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ClassRegistration { .. } | Error::Startup(_))
    }
}
