use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::library::TrackColor;

use super::model::Waveform;

const BLOCKS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Paints a `Waveform` for one frame, one terminal column per sample slot.
pub struct WaveformView<'a> {
    pub waveform: &'a Waveform,
    pub current_time: f64,
    pub duration: f64,
    pub is_playing: bool,
    pub color: TrackColor,
    pub background: TrackColor,
}

impl Widget for WaveformView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.waveform.is_empty() {
            return;
        }
        let bars = self.waveform.bars(self.current_time, self.duration, self.is_playing);

        for col in 0..area.width {
            let idx = (col as usize * bars.len()) / area.width as usize;
            let bar = bars[idx.min(bars.len() - 1)];
            let fg: ratatui::style::Color = self.color.blend_over(self.background, bar.alpha).into();

            // Height in eighths of a cell, filled from the bottom row up.
            let mut eighths = (bar.height * f64::from(area.height) * 8.0).round() as u32;
            for row in (0..area.height).rev() {
                let fill = eighths.min(8);
                eighths -= fill;
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(BLOCKS[fill as usize]).set_fg(fg);
                }
            }
        }
    }
}
