// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::Bitmap;
use crate::constants::BITMAP_SIZE_LIMIT_BYTES;
use crate::errors::ImageError;
use crate::model::EncodedImage;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

const WEBP_MIME_TYPE: &str = "image/webp";

/// Encodes captured bitmaps as base64 WebP.
#[derive(Debug, Clone)]
pub struct BitmapSerializer {
    size_limit_bytes: usize,
}

impl Default for BitmapSerializer {
    fn default() -> Self {
        Self::new(BITMAP_SIZE_LIMIT_BYTES)
    }
}

impl BitmapSerializer {
    pub fn new(size_limit_bytes: usize) -> Self {
        Self { size_limit_bytes }
    }

    pub fn serialize(&self, bitmap: Bitmap) -> Result<EncodedImage, ImageError> {
        let Bitmap {
            width,
            height,
            pixels,
        } = bitmap;
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyBitmap);
        }

        let actual = pixels.len();
        let buffer = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            ImageError::InvalidBuffer {
                width,
                height,
                expected: width as usize * height as usize * 4,
                actual,
            }
        })?;

        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(buffer).write_to(&mut cursor, ImageFormat::WebP)?;
        let bytes = cursor.into_inner();
        if bytes.len() > self.size_limit_bytes {
            return Err(ImageError::TooLarge(bytes.len()));
        }

        Ok(EncodedImage {
            base64: STANDARD.encode(&bytes),
            mime_type: WEBP_MIME_TYPE.to_string(),
        })
    }
}
