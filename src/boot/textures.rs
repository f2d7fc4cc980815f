use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use std::collections::HashMap;

use crate::core::components::AtomKind;

/// Fixed names the play scene looks textures up by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Player,
    Oxygen,
    Hydrogen,
    Enemy,
}

impl TextureKey {
    pub const ALL: [TextureKey; 4] = [
        TextureKey::Player,
        TextureKey::Oxygen,
        TextureKey::Hydrogen,
        TextureKey::Enemy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextureKey::Player => "player",
            TextureKey::Oxygen => "oxygen",
            TextureKey::Hydrogen => "hydrogen",
            TextureKey::Enemy => "enemy",
        }
    }

    pub fn for_atom(kind: AtomKind) -> Self {
        match kind {
            AtomKind::Oxygen => TextureKey::Oxygen,
            AtomKind::Hydrogen => TextureKey::Hydrogen,
        }
    }

    /// Shape, edge length in pixels and fill color (0xRRGGBB).
    pub fn placeholder(self) -> Placeholder {
        match self {
            TextureKey::Player => Placeholder::new(PlaceholderShape::Square, 32, 0x00ff00),
            TextureKey::Oxygen => Placeholder::new(PlaceholderShape::Circle, 32, 0xff0000),
            TextureKey::Hydrogen => Placeholder::new(PlaceholderShape::Circle, 32, 0x0000ff),
            TextureKey::Enemy => Placeholder::new(PlaceholderShape::Square, 64, 0x808080),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderShape {
    Square,
    /// Inscribed circle centered in the square canvas.
    Circle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub shape: PlaceholderShape,
    pub size: u32,
    pub rgb: u32,
}

impl Placeholder {
    pub const fn new(shape: PlaceholderShape, size: u32, rgb: u32) -> Self {
        Self { shape, size, rgb }
    }

    /// Row-major RGBA8 pixels; anything outside the shape is fully transparent.
    pub fn rasterize(&self) -> Vec<u8> {
        let [_, r, g, b] = self.rgb.to_be_bytes();
        let size = self.size;
        let radius = size as f32 / 2.0;
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let inside = match self.shape {
                    PlaceholderShape::Square => true,
                    PlaceholderShape::Circle => {
                        // sample at pixel centers
                        let dx = x as f32 + 0.5 - radius;
                        let dy = y as f32 + 0.5 - radius;
                        dx * dx + dy * dy <= radius * radius
                    }
                };
                if inside {
                    data.extend_from_slice(&[r, g, b, 255]);
                } else {
                    data.extend_from_slice(&[0, 0, 0, 0]);
                }
            }
        }
        data
    }

    pub fn to_image(&self) -> Image {
        Image::new(
            Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            self.rasterize(),
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
    }
}

/// Handles of the generated placeholder textures, keyed by [`TextureKey`].
#[derive(Resource, Debug, Default, Clone)]
pub struct SpriteTextures {
    handles: HashMap<TextureKey, Handle<Image>>,
}

impl SpriteTextures {
    pub fn insert(&mut self, key: TextureKey, handle: Handle<Image>) {
        self.handles.insert(key, handle);
    }

    /// Unregistered keys fall back to the default (blank) image handle.
    pub fn get(&self, key: TextureKey) -> Handle<Image> {
        self.handles.get(&key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, key: TextureKey) -> bool {
        self.handles.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
