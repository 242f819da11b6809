//! Frame rendering.
//!
//! Renderers draw board snapshots and know nothing about the rules. The
//! match's frame log is drawn in order, frame 0 being the initial board.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::board::{Board, Color};
use crate::constants::BACKGROUND;

/// A drawing surface for board snapshots.
pub trait Renderer {
    /// Draw one snapshot with cells `pitch` pixels wide.
    fn draw(&mut self, board: &Board, pitch: u32) -> Result<()>;
}

/// Draw every frame in log order.
pub fn render_frames<R: Renderer + ?Sized>(renderer: &mut R, frames: &[Board], pitch: u32) -> Result<()> {
    for (i, frame) in frames.iter().enumerate() {
        renderer
            .draw(frame, pitch)
            .with_context(|| format!("failed to draw frame {i}"))?;
    }
    Ok(())
}

/// Writes each frame as a text grid, separated by blank lines.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, board: &Board, _pitch: u32) -> Result<()> {
        writeln!(self.out, "{board}")?;
        Ok(())
    }
}

/// Render one board as an SVG document: a background square with one
/// filled circle per stone.
pub fn board_to_svg(board: &Board, pitch: u32) -> String {
    let side = pitch * board.size() as u32;
    let r = pitch / 2;
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}">"#
    );
    let _ = writeln!(svg, r#"  <rect width="{side}" height="{side}" fill="{BACKGROUND}"/>"#);
    for (x, y, cell) in board.cells() {
        let fill = match cell.color() {
            Some(Color::Black) => "black",
            Some(Color::White) => "white",
            None => continue,
        };
        let cx = x as u32 * pitch + r;
        let cy = y as u32 * pitch + r;
        let _ = writeln!(svg, r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#);
    }
    svg.push_str("</svg>\n");
    svg
}

/// Collects SVG frames in memory and optionally writes them to a directory
/// as `frame_0000.svg`, `frame_0001.svg`, ...
#[derive(Debug, Default)]
pub struct SvgRenderer {
    dir: Option<PathBuf>,
    frames: Vec<String>,
}

impl SvgRenderer {
    /// Keep frames in memory only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write every frame into `dir`, creating it if needed.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        Ok(Self {
            dir: Some(dir),
            frames: Vec::new(),
        })
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Renderer for SvgRenderer {
    fn draw(&mut self, board: &Board, pitch: u32) -> Result<()> {
        let svg = board_to_svg(board, pitch);
        if let Some(dir) = &self.dir {
            let path = dir.join(format!("frame_{:04}.svg", self.frames.len()));
            fs::write(&path, &svg).with_context(|| format!("failed to write {}", path.display()))?;
        }
        self.frames.push(svg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::constants::DEFAULT_PITCH;

    #[test]
    fn test_svg_circles() {
        let svg = board_to_svg(&Board::starting(), DEFAULT_PITCH);
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains(r#"width="300""#));
        // Black stone at (2, 2): center 2*50 + 25.
        assert!(svg.contains(r#"<circle cx="125" cy="125" r="25" fill="black"/>"#));
        assert!(svg.contains(r#"<circle cx="175" cy="125" r="25" fill="white"/>"#));
    }

    #[test]
    fn test_svg_empty_board() {
        let svg = board_to_svg(&Board::new(6), 10);
        assert!(!svg.contains("<circle"));
        assert!(svg.contains(r#"fill="green""#));
    }

    #[test]
    fn test_render_frames_in_order() {
        let mut first = Board::new(6);
        first.set(0, 0, Cell::Black).unwrap();
        let frames = vec![Board::new(6), first];
        let mut renderer = SvgRenderer::new();
        render_frames(&mut renderer, &frames, 50).unwrap();
        assert_eq!(renderer.frames().len(), 2);
        assert!(!renderer.frames()[0].contains("<circle"));
        assert!(renderer.frames()[1].contains(r#"cx="25" cy="25""#));
    }

    #[test]
    fn test_text_renderer() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.draw(&Board::starting(), 50).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, format!("{}\n", Board::starting()));
    }
}
