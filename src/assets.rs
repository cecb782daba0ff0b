use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::warn;
use thiserror::Error;

use crate::obj::{load_obj_from_str, ObjMesh};

/// Compiled-in asset locations. The demo runs without any of them present
/// by falling back to procedural stand-ins.
pub const DIFFUSE_TEXTURE_PATH: &str = "assets/studdedmetal.bmp";
pub const MODEL_PATH: &str = "assets/model.obj";

/// Skybox faces in the +X, -X, +Y, -Y, +Z, -Z order the cubemap expects.
pub const SKYBOX_FACE_PATHS: [&str; 6] = [
    "assets/skybox/right.png",
    "assets/skybox/left.png",
    "assets/skybox/top.png",
    "assets/skybox/bottom.png",
    "assets/skybox/front.png",
    "assets/skybox/back.png",
];

/// Recoverable asset-loading failure surfaced to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image {path}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to parse model {path}: {message}")]
    Model { path: PathBuf, message: String },
    #[error("cubemap face {path} is {got_width}x{got_height}, expected {expected_width}x{expected_height}")]
    FaceMismatch {
        path: PathBuf,
        expected_width: u32,
        expected_height: u32,
        got_width: u32,
        got_height: u32,
    },
}

/// Decodes a texture image into RGBA8.
pub fn load_texture(path: impl AsRef<Path>) -> Result<RgbaImage, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| LoadError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Loads the six cubemap faces; every face must share the first face's
/// dimensions.
pub fn load_cubemap<P: AsRef<Path>>(paths: &[P; 6]) -> Result<[RgbaImage; 6], LoadError> {
    let mut faces = Vec::with_capacity(6);
    let mut expected: Option<(u32, u32)> = None;
    for path in paths {
        let face = load_texture(path)?;
        let dims = face.dimensions();
        match expected {
            None => expected = Some(dims),
            Some((width, height)) if dims != (width, height) => {
                return Err(LoadError::FaceMismatch {
                    path: path.as_ref().to_path_buf(),
                    expected_width: width,
                    expected_height: height,
                    got_width: dims.0,
                    got_height: dims.1,
                });
            }
            Some(_) => {}
        }
        faces.push(face);
    }
    Ok(faces
        .try_into()
        .expect("exactly six faces were collected"))
}

/// Reads and parses an OBJ model file.
pub fn load_model(path: impl AsRef<Path>) -> Result<ObjMesh, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_obj_from_str(&text).map_err(|err| LoadError::Model {
        path: path.to_path_buf(),
        message: format!("{err:#}"),
    })
}

/// Loads the diffuse map, substituting a checkerboard when the file is
/// missing so the demo stays runnable from a bare checkout.
pub fn diffuse_or_fallback() -> RgbaImage {
    match load_texture(DIFFUSE_TEXTURE_PATH) {
        Ok(image) => image,
        Err(err) => {
            warn!("{err}; using checkerboard fallback");
            checkerboard(256, [180, 180, 190, 255], [60, 60, 70, 255])
        }
    }
}

/// Loads the skybox faces, substituting a vertical gradient on failure.
pub fn skybox_or_fallback() -> [RgbaImage; 6] {
    let paths = SKYBOX_FACE_PATHS.map(PathBuf::from);
    match load_cubemap(&paths) {
        Ok(faces) => faces,
        Err(err) => {
            warn!("{err}; using gradient sky fallback");
            gradient_sky(128)
        }
    }
}

/// Procedural two-tone checkerboard, 16 pixel cells.
pub fn checkerboard(size: u32, light: [u8; 4], dark: [u8; 4]) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if ((x / 16) + (y / 16)) % 2 == 0 {
            image::Rgba(light)
        } else {
            image::Rgba(dark)
        }
    })
}

/// Procedural sky: each face fades from a horizon tone to a zenith tone.
pub fn gradient_sky(size: u32) -> [RgbaImage; 6] {
    let face = |top: [u8; 4], bottom: [u8; 4]| {
        RgbaImage::from_fn(size, size, move |_, y| {
            let t = y as f32 / size.saturating_sub(1).max(1) as f32;
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
            image::Rgba([
                mix(top[0], bottom[0]),
                mix(top[1], bottom[1]),
                mix(top[2], bottom[2]),
                255,
            ])
        })
    };
    let zenith = [25, 35, 80, 255];
    let horizon = [120, 140, 180, 255];
    [
        face(zenith, horizon),
        face(zenith, horizon),
        face(zenith, zenith),
        face(horizon, horizon),
        face(zenith, horizon),
        face(zenith, horizon),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_texture_is_an_io_error() {
        let err = load_texture("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.png");
        fs::File::create(&path)
            .unwrap()
            .write_all(b"not an image")
            .unwrap();
        let err = load_texture(&path).unwrap_err();
        assert!(matches!(err, LoadError::Image { .. }));
    }

    #[test]
    fn model_round_trips_through_the_filesystem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tri.obj");
        fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        let mesh = load_model(&path).unwrap();
        assert_eq!(mesh.index_count(), 3);
    }

    #[test]
    fn invalid_model_is_a_model_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.obj");
        fs::write(&path, "# no geometry\n").unwrap();
        assert!(matches!(
            load_model(&path).unwrap_err(),
            LoadError::Model { .. }
        ));
    }

    #[test]
    fn cubemap_faces_must_match_dimensions() {
        let dir = TempDir::new().unwrap();
        let big = dir.path().join("big.png");
        let small = dir.path().join("small.png");
        checkerboard(8, [255; 4], [0, 0, 0, 255]).save(&big).unwrap();
        checkerboard(4, [255; 4], [0, 0, 0, 255])
            .save(&small)
            .unwrap();
        let paths = [&big, &big, &big, &big, &big, &small];
        assert!(matches!(
            load_cubemap(&paths).unwrap_err(),
            LoadError::FaceMismatch { .. }
        ));
        let uniform = [&big, &big, &big, &big, &big, &big];
        assert!(load_cubemap(&uniform).is_ok());
    }

    #[test]
    fn checkerboard_has_requested_size() {
        let board = checkerboard(32, [255; 4], [0; 4]);
        assert_eq!(board.dimensions(), (32, 32));
    }

    #[test]
    fn gradient_sky_handles_degenerate_sizes() {
        for face in gradient_sky(1) {
            assert_eq!(face.dimensions(), (1, 1));
        }
        for face in gradient_sky(0) {
            assert_eq!(face.dimensions(), (0, 0));
        }
    }
}
