use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use flappy_fb::core::{AssetStore, FrameTiming, Game, NoPacer, NullScanOut, ScriptedButton};
use flappy_fb::term::{CanvasView, FrameBuffer, Viewport};
use flappy_fb::types::RESOLUTION_SCALE;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn canvas_view_render_into_does_not_allocate() {
    let store = AssetStore::solid([1, 2, 3, 3, 3, 4, 5, 6]);
    let mut game = Game::new(
        store,
        ScriptedButton::new([true]),
        NullScanOut::default(),
        NoPacer::default(),
        FrameTiming::immediate(),
    );
    game.step().unwrap();

    let view = CanvasView::new();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(game.presenter().front(), RESOLUTION_SCALE, Some("space"), viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            view.render_into(
                game.presenter().front(),
                RESOLUTION_SCALE,
                Some("space"),
                viewport,
                &mut fb,
            );
        }
    });

    assert_eq!(allocs, 0);
}
