//! Array state and the bar geometry derived from it
//!
//! [`Canvas`] owns the array being sorted. Its [`DrawContext`] is recomputed
//! when the array is replaced or the surface is resized, never when a sort
//! mutates the array in place: sorting only permutes values, so the bounds
//! stay valid.

use crate::error::VisualizerError;

/// Vertical resolution of one terminal cell (block glyphs come in eighths)
pub const EIGHTHS_PER_CELL: u32 = 8;

/// Bar geometry derived from the array bounds and the surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawContext {
    /// Surface size in cells
    pub width: u16,
    pub height: u16,
    pub min_value: i32,
    pub max_value: i32,
    /// Columns per bar, at least 1
    pub bar_width: u16,
    /// `max_value - min_value`, or 1 when every value is equal
    pub value_range: u32,
    /// Column of the first bar, relative to the bar region
    pub start_x: u16,
}

impl DrawContext {
    /// Compute the geometry for `values` drawn into a `width` x `height` region.
    /// `values` must not be empty.
    fn compute(width: u16, height: u16, side_pad: u16, values: &[i32]) -> Self {
        let min_value = values.iter().copied().min().unwrap_or_default();
        let max_value = values.iter().copied().max().unwrap_or_default();

        let usable = width.saturating_sub(side_pad);
        let bar_width = (usable as usize / values.len().max(1)).clamp(1, u16::MAX as usize) as u16;

        // An all-equal array has no range; treat it as 1 so every bar is flat
        let value_range = (max_value as i64 - min_value as i64).clamp(1, u32::MAX as i64) as u32;

        DrawContext {
            width,
            height,
            min_value,
            max_value,
            bar_width,
            value_range,
            start_x: side_pad / 2,
        }
    }

    /// Height of the bar for `value`, in eighths of a cell
    pub fn bar_eighths(&self, value: i32) -> u32 {
        let above_min = (value as i64 - self.min_value as i64).max(0) as u64;
        let total = self.height as u64 * EIGHTHS_PER_CELL as u64;
        (above_min * total / self.value_range as u64) as u32
    }

    /// Column of bar `index`, relative to the bar region
    pub fn bar_x(&self, index: usize) -> usize {
        self.start_x as usize + index * self.bar_width as usize
    }
}

/// The array being sorted plus its drawing geometry
#[derive(Debug, Clone)]
pub struct Canvas {
    values: Vec<i32>,
    side_pad: u16,
    context: DrawContext,
}

impl Canvas {
    /// Create a canvas for a `width` x `height` bar region
    pub fn new(width: u16, height: u16, side_pad: u16, values: Vec<i32>) -> Result<Self, VisualizerError> {
        if values.is_empty() {
            return Err(VisualizerError::EmptyArray);
        }

        let context = DrawContext::compute(width, height, side_pad, &values);
        Ok(Canvas {
            values,
            side_pad,
            context,
        })
    }

    /// Install a new array and recompute the geometry
    pub fn replace_array(&mut self, values: Vec<i32>) -> Result<(), VisualizerError> {
        if values.is_empty() {
            return Err(VisualizerError::EmptyArray);
        }

        self.values = values;
        self.recompute(self.context.width, self.context.height);
        Ok(())
    }

    /// Recompute the geometry for a new bar region size
    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.context.width || height != self.context.height {
            self.recompute(width, height);
        }
    }

    fn recompute(&mut self, width: u16, height: u16) {
        self.context = DrawContext::compute(width, height, self.side_pad, &self.values);
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Mutable access for sort routines; the length cannot change through a slice
    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn context(&self) -> &DrawContext {
        &self.context
    }
}
