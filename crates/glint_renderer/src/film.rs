//! Film: the working pixel buffer a frame is rendered into and the
//! presentation-facing image it is published to.

use std::path::Path;

/// Presentation-facing image of packed RGBA pixels.
///
/// Row-major, origin top-left, byte order R,G,B,A from the least significant
/// byte. A display layer blits [`FinalImage::as_bytes`]; the renderer
/// refreshes the contents once per completed frame.
#[derive(Debug, Clone)]
pub struct FinalImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl FinalImage {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; (width * height) as usize];
    }

    fn set_data(&mut self, pixels: &[u32]) {
        self.data.copy_from_slice(pixels);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed pixels of the most recently published frame.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// The published frame as raw RGBA bytes, ready to blit.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Save the published frame as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Owns the CPU-side working buffer and the image frames are published to.
///
/// The working buffer holds one packed color per pixel, row-major. It is
/// reallocated only when the requested dimensions actually change; repeated
/// resize notifications with the same size are no-ops.
pub struct Film {
    image: Option<FinalImage>,
    pixels: Vec<u32>,
}

impl Film {
    /// Create a film with no allocated buffer. The first [`Film::resize`]
    /// allocates.
    pub fn new() -> Self {
        Self {
            image: None,
            pixels: Vec::new(),
        }
    }

    /// Bring the film to `width` x `height`. Dimensions must be positive.
    ///
    /// Unchanged dimensions return immediately without touching either
    /// allocation. A genuine change replaces the working buffer wholesale —
    /// the previous allocation is dropped, never grown in place.
    pub fn resize(&mut self, width: u32, height: u32) {
        match &mut self.image {
            Some(image) => {
                if image.width() == width && image.height() == height {
                    return;
                }
                image.resize(width, height);
            }
            None => self.image = Some(FinalImage::new(width, height)),
        }

        log::debug!("film buffer reallocated to {width}x{height}");
        self.pixels = vec![0; (width * height) as usize];
    }

    /// Copy the finished working buffer into the presentation image as one
    /// update. Callers never observe a partially written frame.
    pub fn publish(&mut self) {
        if let Some(image) = &mut self.image {
            image.set_data(&self.pixels);
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.as_ref().map_or(0, FinalImage::width)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.as_ref().map_or(0, FinalImage::height)
    }

    /// Number of pixel slots in the working buffer.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Working buffer for the in-flight frame, row-major.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The presentation image, once the first resize has allocated it.
    pub fn image(&self) -> Option<&FinalImage> {
        self.image.as_ref()
    }
}

impl Default for Film {
    fn default() -> Self {
        Self::new()
    }
}
