use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ar_model_placer::host::{ControlRenderable, Placeable, PrimaryRenderable};
use ar_model_placer::{ArSceneHost, AssetId, SceneNodeRegistry, SimulatedScene, SurfaceHit};
use glam::Vec3;
use std::hint::black_box;

fn build_scene(node_count: usize) -> (SimulatedScene, SceneNodeRegistry) {
    let mut scene = SimulatedScene::new();
    let mut registry = SceneNodeRegistry::new();

    for index in 0..node_count {
        let x = (index % 32) as f32 * 0.5;
        let z = -((index / 32) as f32) * 0.5 - 1.0;
        let anchor = scene.create_anchor(&SurfaceHit::new(Vec3::new(x, 0.0, z), 1));
        let placeable = Placeable {
            primary: PrimaryRenderable {
                model_ref: AssetId::new("astronaut"),
                collision_height: 1.0 + (index % 5) as f32 * 0.1,
            },
            control: ControlRenderable::delete_button(),
        };
        let id = registry.place(&mut scene, anchor, placeable);
        // alle Bedienelemente sichtbar, damit jeder Node aktualisiert wird
        let _ = registry.toggle_control(&mut scene, id);
    }

    scene.set_camera_position(Vec3::new(4.0, 1.6, 2.0));
    (scene, registry)
}

fn bench_aux_orientations(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_update");

    for &node_count in &[10usize, 100usize, 1_000usize] {
        let (mut scene, registry) = build_scene(node_count);

        group.bench_with_input(
            BenchmarkId::new("update_aux_orientations", node_count),
            &node_count,
            |b, _| {
                b.iter(|| black_box(registry.update_aux_orientations(black_box(&mut scene))))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aux_orientations);
criterion_main!(benches);
