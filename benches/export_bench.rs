use criterion::{criterion_group, criterion_main, Criterion};
use bo3_tools::{
    bo3, build_blocks, export, schematic, BlockListOptions, BlockPosition, ConfigMode, ExportRequest, Material,
    SchematicWorld, Selection,
};

fn big_world() -> SchematicWorld {
    let mut world = SchematicWorld::new("Big World", (64, 64, 64));
    for x in 0..64 {
        for y in 0..32 {
            for z in 0..64 {
                let material = if y == 31 { Material::GRASS } else { Material::STONE };
                world.set_block(BlockPosition::new(x, y, z), material, 0);
            }
        }
    }
    for y in 32..40 {
        world.set_block(BlockPosition::new(32, y, 32), Material::LOG, 0);
    }
    world
}

fn benchmark_build_blocks(c: &mut Criterion) {
    let world = big_world();
    let bounds = world.get_bounding_box();

    c.bench_function("build blocks", |b| {
        b.iter(|| build_blocks(&world, &bounds, BlockPosition::new(32, 32, 32), "big", BlockListOptions::default()))
    });
}

fn benchmark_bo3_writing(c: &mut Criterion) {
    let world = big_world();
    let dir = tempfile::tempdir().unwrap();
    let bounds = world.get_bounding_box();
    let request = ExportRequest {
        selection: Some(Selection::new(world.name.clone(), bounds.min, bounds.max)),
        center: Some(BlockPosition::new(32, 32, 32)),
        ..ExportRequest::new("big")
    };
    let document = export(&request, &world, dir.path()).unwrap();

    c.bench_function("write bo3", |b| {
        b.iter(|| bo3::to_bo3_string(&document, ConfigMode::WriteAll))
    });
}

fn benchmark_full_export(c: &mut Criterion) {
    let world = big_world();
    let dir = tempfile::tempdir().unwrap();
    let bounds = world.get_bounding_box();
    let request = ExportRequest {
        selection: Some(Selection::new(world.name.clone(), bounds.min, bounds.max)),
        center: Some(BlockPosition::new(32, 32, 32)),
        ..ExportRequest::new("big")
    };

    c.bench_function("export big world", |b| {
        b.iter(|| export(&request, &world, dir.path()).unwrap())
    });
}

fn benchmark_schematic_loading(c: &mut Criterion) {
    let bytes = schematic::to_schematic(&big_world()).unwrap();

    c.bench_function("load schematic", |b| {
        b.iter(|| schematic::from_schematic("Big World", &bytes).unwrap())
    });
}

criterion_group!(benches, benchmark_build_blocks, benchmark_bo3_writing, benchmark_full_export, benchmark_schematic_loading);
criterion_main!(benches);
