use crate::buffer::{Buffer, Kind};
use crate::config::Config;
use crate::scene::Scene;
use crate::shading;
use crate::tile::{Block, TileDispatcher};
use std::sync::Mutex;
use std::time::Instant;

/// Renders `scene` into a `w x h` RGB buffer. Dispatches `config.block_size`
/// tiles to `config.threads` worker threads through a single mutex-guarded
/// counter; `threads == 1` takes a single-threaded path with no dispatcher
/// or worker threads at all.
pub fn render(scene: &Scene, config: &Config, w: usize, h: usize) -> Buffer {
    let start = Instant::now();
    tracing::info!(w, h, threads = config.threads, "render start");

    let buffer = if config.threads <= 1 {
        render_single_threaded(scene, config, w, h)
    } else {
        render_multi_threaded(scene, config, w, h)
    };

    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "render done");
    buffer
}

fn render_single_threaded(scene: &Scene, config: &Config, w: usize, h: usize) -> Buffer {
    let mut buffer = Buffer::new(w, h, Kind::Rgb);
    for block in row_major_blocks(w, h, config.block_size) {
        for y in block.y0..block.y1 {
            for x in block.x0..block.x1 {
                let color = shading::cast(scene, config, x, y, w, h);
                buffer.set_pixel(x, y, color);
            }
        }
    }
    buffer
}

fn render_multi_threaded(scene: &Scene, config: &Config, w: usize, h: usize) -> Buffer {
    let dispatcher = TileDispatcher::new(w, h, config.block_size);
    let buffer = Mutex::new(Buffer::new(w, h, Kind::Rgb));

    std::thread::scope(|s| {
        for _ in 0..config.threads {
            s.spawn(|| {
                while let Some(block) = dispatcher.next_block() {
                    let data = render_block(scene, config, &block, w, h);
                    buffer
                        .lock()
                        .unwrap()
                        .write_block(block.x0, block.y0, block.x1, block.y1, &data);
                }
            });
        }
    });

    buffer.into_inner().unwrap()
}

fn row_major_blocks(w: usize, h: usize, block_size: usize) -> Vec<Block> {
    assert!(
        w % block_size == 0 && h % block_size == 0,
        "image dimensions must be multiples of block_size"
    );
    let block_w = w / block_size;
    let block_h = h / block_size;
    (0..block_w * block_h)
        .map(|i| {
            let col = i % block_w;
            let row = i / block_w;
            Block {
                x0: col * block_size,
                y0: row * block_size,
                x1: col * block_size + block_size,
                y1: row * block_size + block_size,
            }
        })
        .collect()
}

/// Renders a block's pixels into a standalone RGB byte buffer, row-major,
/// so a worker thread can compute it without touching shared state until
/// the final copy into the shared buffer.
fn render_block(scene: &Scene, config: &Config, block: &Block, w: usize, h: usize) -> Vec<u8> {
    let block_w = block.x1 - block.x0;
    let block_h = block.y1 - block.y0;
    let mut data = vec![0u8; block_w * block_h * 3];

    for y in block.y0..block.y1 {
        for x in block.x0..block.x1 {
            let color = shading::cast(scene, config, x, y, w, h);
            let offset = ((y - block.y0) * block_w + (x - block.x0)) * 3;
            data[offset] = (color.x.clamp(0.0, 1.0) * 255.0) as u8;
            data[offset + 1] = (color.y.clamp(0.0, 1.0) * 255.0) as u8;
            data[offset + 2] = (color.z.clamp(0.0, 1.0) * 255.0) as u8;
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_blocks_cover_the_whole_image_once() {
        let blocks = row_major_blocks(20, 10, 10);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block { x0: 0, y0: 0, x1: 10, y1: 10 });
        assert_eq!(blocks[1], Block { x0: 10, y0: 0, x1: 20, y1: 10 });
    }
}
