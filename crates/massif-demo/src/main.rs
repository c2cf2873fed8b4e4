//! Headless demo binary that generates terrain and writes debug images.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p massif-demo` to generate the default chunk lattice.
//! Run with `cargo run -p massif-demo -- --strategy diamond-square --size 65`
//! to generate a fractal island instead.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use image::error::{ParameterError, ParameterErrorKind};
use massif_config::{AppDirs, CliArgs, Config, TerrainSection, TerrainStrategy, VizSection};
use massif_terrain::viz::{DebugImage, render_heightfield, render_normal_map};
use massif_terrain::{
    ChunkGenerator, ChunkLayout, DiamondSquareGenerator, DiamondSquareParams,
    HeightfieldGenerator, NoiseParams, TerrainError,
};
use massif_world::TerrainWorld;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => match AppDirs::resolve() {
            Ok(dirs) => dirs.config_dir,
            Err(e) => {
                eprintln!("Failed to resolve config directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    massif_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    run(&config)
}

fn run(config: &Config) -> ExitCode {
    let terrain = &config.terrain;
    info!(
        "Generating terrain: strategy {:?}, seed {}",
        terrain.strategy, terrain.seed
    );

    match terrain.strategy {
        TerrainStrategy::DiamondSquare => match build_fractal_generator(terrain) {
            Ok(generator) => run_fractal(TerrainWorld::new(generator), &config.viz),
            Err(e) => {
                error!("Invalid diamond-square settings: {e}");
                ExitCode::FAILURE
            }
        },
        TerrainStrategy::LayeredNoise => match build_chunk_generator(terrain) {
            Ok(generator) => run_chunks(TerrainWorld::new(generator), &config.viz),
            Err(e) => {
                error!("Invalid layered-noise settings: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn build_fractal_generator(
    terrain: &TerrainSection,
) -> Result<DiamondSquareGenerator, TerrainError> {
    DiamondSquareGenerator::new(
        terrain.fractal_size as usize,
        terrain.world_scale,
        DiamondSquareParams {
            roughness: terrain.roughness,
            seed: terrain.seed,
        },
    )
}

fn build_chunk_generator(terrain: &TerrainSection) -> Result<ChunkGenerator, TerrainError> {
    ChunkGenerator::new(
        ChunkLayout {
            x_chunks: terrain.x_chunks as usize,
            z_chunks: terrain.z_chunks as usize,
            chunk_width: terrain.chunk_width as usize,
            chunk_depth: terrain.chunk_depth as usize,
        },
        terrain.world_scale,
        terrain.seed,
        NoiseParams {
            octaves: terrain.octaves,
            noise_scale: terrain.noise_scale,
            persistence: terrain.persistence,
            lacunarity: terrain.lacunarity,
            mesh_height: terrain.mesh_height,
            water_height: terrain.water_height,
        },
    )
}

fn run_fractal(mut world: TerrainWorld<DiamondSquareGenerator>, viz: &VizSection) -> ExitCode {
    let (min, max) = world.generator().height_range();
    info!(
        "Fractal grid: {side}x{side} samples, height range [{min:.2}, {max:.2}]",
        side = world.generator().side()
    );
    report_meshes(&world);

    // Water sits at height zero, the midpoint of the displacement range.
    if let Err(e) = write_debug_images(&world, (min, max), 0.0, viz) {
        error!("Failed to write debug images: {e}");
        return ExitCode::FAILURE;
    }

    demonstrate_fractal_reseed(&mut world);
    ExitCode::SUCCESS
}

fn run_chunks(mut world: TerrainWorld<ChunkGenerator>, viz: &VizSection) -> ExitCode {
    let layout = *world.generator().layout();
    info!(
        "Chunk lattice: {}x{} chunks of {}x{} samples, water level {:.2}",
        layout.x_chunks,
        layout.z_chunks,
        layout.chunk_width,
        layout.chunk_depth,
        world.generator().water_level()
    );
    report_meshes(&world);

    let range = global_height_range(&world);
    let water_level = world.generator().water_level();
    if let Err(e) = write_debug_images(&world, range, water_level, viz) {
        error!("Failed to write debug images: {e}");
        return ExitCode::FAILURE;
    }

    demonstrate_live_retuning(&mut world);
    ExitCode::SUCCESS
}

fn report_meshes<G: HeightfieldGenerator>(world: &TerrainWorld<G>) {
    let (x_chunks, z_chunks) = world.lattice();
    for cz in 0..z_chunks {
        for cx in 0..x_chunks {
            let mesh = world.mesh((cx, cz));
            info!(
                "Chunk ({cx}, {cz}): {} vertices, {} indices",
                mesh.vertices.len(),
                mesh.indices.len()
            );
        }
    }
    info!("Total triangles: {}", world.triangle_count());
}

/// Smallest and largest height across every chunk, for a shared color scale.
fn global_height_range(world: &TerrainWorld<ChunkGenerator>) -> (f32, f32) {
    let (x_chunks, z_chunks) = world.lattice();
    let mut range: Option<(f32, f32)> = None;
    for cz in 0..z_chunks {
        for cx in 0..x_chunks {
            if let Some((lo, hi)) = world.generator().heightfield((cx, cz)).min_max() {
                range = Some(match range {
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                    None => (lo, hi),
                });
            }
        }
    }
    range.unwrap_or((0.0, 1.0))
}

/// Writes one elevation and one normal-map PNG per chunk.
fn write_debug_images<G: HeightfieldGenerator>(
    world: &TerrainWorld<G>,
    height_range: (f32, f32),
    water_level: f32,
    viz: &VizSection,
) -> Result<(), image::ImageError> {
    std::fs::create_dir_all(&viz.output_dir)?;

    let (x_chunks, z_chunks) = world.lattice();
    let mut written = 0u32;
    for cz in 0..z_chunks {
        for cx in 0..x_chunks {
            let field = world.generator().heightfield((cx, cz));
            let elevation =
                render_heightfield(field, height_range, water_level).scaled(viz.image_scale);
            let normals = render_normal_map(field).scaled(viz.image_scale);

            save_png(
                &elevation,
                &viz.output_dir.join(format!("chunk_{cx}_{cz}_height.png")),
            )?;
            save_png(
                &normals,
                &viz.output_dir.join(format!("chunk_{cx}_{cz}_normals.png")),
            )?;
            written += 2;
        }
    }

    info!("Wrote {written} debug images to {}", viz.output_dir.display());
    Ok(())
}

fn save_png(img: &DebugImage, path: &Path) -> Result<(), image::ImageError> {
    match image::RgbaImage::from_raw(img.width, img.height, img.pixels.clone()) {
        Some(buffer) => buffer.save(path),
        None => Err(image::ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))),
    }
}

/// Demonstrates live parameter editing with change detection.
fn demonstrate_live_retuning(world: &mut TerrainWorld<ChunkGenerator>) {
    info!("Starting live retuning demonstration");

    let revision_before = world.revision();
    assert!(
        !world.update(),
        "update must not rebuild while parameters are untouched"
    );

    world.generator_mut().params_mut().mesh_height *= 1.5;
    let rebuilt = world.update();
    info!(
        "Edited mesh height: rebuilt={rebuilt}, revision {revision_before} -> {}",
        world.revision()
    );

    info!("Live retuning demonstration completed successfully");
}

/// Demonstrates reseeding the fractal and regenerating in place.
fn demonstrate_fractal_reseed(world: &mut TerrainWorld<DiamondSquareGenerator>) {
    info!("Starting fractal reseed demonstration");

    let (min_before, max_before) = world.generator().height_range();
    let next_seed = world.generator().params().seed.wrapping_add(1);
    world.generator_mut().params_mut().seed = next_seed;
    world.regenerate_all();

    let (min_after, max_after) = world.generator().height_range();
    info!(
        "Reseeded to {next_seed}: range [{min_before:.2}, {max_before:.2}] -> \
         [{min_after:.2}, {max_after:.2}], revision {}",
        world.revision()
    );

    info!("Fractal reseed demonstration completed successfully");
}
