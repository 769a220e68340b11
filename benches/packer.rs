use criterion::{Criterion, black_box, criterion_group, criterion_main};
use widget_grid::{
    Board, BoardConfig, BoardEvent, Category, CategoryTable, DragCommand, SequentialIdGenerator,
    Side, Widget, WidgetId, WidgetSize, Zone, pack_rows,
};

const PALETTE: &[&str] = &[
    "Like Button",
    "Profile Card",
    "Announcement Banner",
    "Search Bar",
    "Star Rating",
    "Event Calendar",
    "Tag Cloud",
    "Comment Thread",
];

fn widgets(count: usize) -> Vec<Widget> {
    let category = Category::new("general", "#6b7280");
    (0..count)
        .map(|i| {
            let size = match i % 5 {
                0 | 3 => WidgetSize::Small,
                1 | 4 => WidgetSize::Medium,
                _ => WidgetSize::Large,
            };
            Widget::new(
                WidgetId::new(format!("w-{i}")),
                "bench",
                format!("Widget {i}"),
                Zone::Above,
                size,
                &category,
            )
        })
        .collect()
}

fn pack_mixed_sizes(c: &mut Criterion) {
    let widgets = widgets(512);
    c.bench_function("pack_rows_512_mixed", |b| {
        b.iter(|| black_box(pack_rows(black_box(&widgets))).len());
    });
}

fn scripted_events() -> Vec<BoardEvent> {
    let mut events = Vec::new();
    for (i, name) in PALETTE.iter().cycle().take(64).enumerate() {
        let zone = if i % 2 == 0 { Zone::Above } else { Zone::Below };
        events.push(BoardEvent::PaletteDragOver(zone));
        events.push(BoardEvent::palette_drop(zone, format!(r#"{{"name":"{name}"}}"#)));
    }
    for i in 1..32 {
        events.push(BoardEvent::Reorder(DragCommand::StartDrag(WidgetId::new(format!(
            "w-{i}"
        )))));
        events.push(BoardEvent::Reorder(DragCommand::HoverOver {
            over: WidgetId::new(format!("w-{}", 64 - i)),
            side: if i % 2 == 0 { Side::Left } else { Side::Right },
        }));
        events.push(BoardEvent::Reorder(DragCommand::Drop));
    }
    events
}

fn board_script(c: &mut Criterion) {
    let script = scripted_events();
    c.bench_function("board_drop_and_reorder_script", |b| {
        b.iter(|| {
            let mut board = Board::with_parts(
                BoardConfig::default(),
                CategoryTable::builtin(),
                SequentialIdGenerator::new("w"),
            );
            black_box(board.run_scripted(black_box(script.clone())))
        });
    });
}

fn board_script_journaled(c: &mut Criterion) {
    let script = scripted_events();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("board.log");
    c.bench_function("board_script_with_log_file", |b| {
        b.iter(|| {
            let config = BoardConfig::default()
                .with_log_file(&path, 64 * 1024)
                .expect("log file");
            let mut board = Board::with_parts(
                config,
                CategoryTable::builtin(),
                SequentialIdGenerator::new("w"),
            );
            black_box(board.run_scripted(black_box(script.clone())))
        });
    });
}

criterion_group!(benches, pack_mixed_sizes, board_script, board_script_journaled);
criterion_main!(benches);
