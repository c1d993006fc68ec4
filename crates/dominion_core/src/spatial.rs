use dominion_data::Vec3;

/// Uniform grid over the world's x/y plane, rebuilt once per tick from live
/// agent positions.
///
/// Cells store entry indices in one compact array addressed through a
/// compressed-offset table (`cell_offsets[c]..cell_offsets[c+1]`). Queries
/// walk the cell rectangle covering the radius and return candidates; the
/// caller applies the exact squared-distance test, so the result set is
/// identical to a brute-force scan over all entries.
#[derive(Debug, Clone, Default)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    cell_offsets: Vec<usize>,
    entries: Vec<u32>,
}

impl SpatialGrid {
    #[must_use]
    pub fn new(cell_size: f32, world_size: f32) -> Self {
        let cols = (world_size / cell_size).ceil().max(1.0) as usize;
        Self {
            cell_size,
            cols,
            rows: cols,
            cell_offsets: vec![0; cols * cols + 1],
            entries: Vec::new(),
        }
    }

    #[inline]
    fn cell_index(&self, x: f32, y: f32) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        // Guard the cast before indexing; positions are clamped into world
        // bounds elsewhere but queries accept arbitrary points.
        if x.abs() > i32::MAX as f32 * self.cell_size || y.abs() > i32::MAX as f32 * self.cell_size
        {
            return None;
        }
        let cx = (x / self.cell_size) as i32;
        let cy = (y / self.cell_size) as i32;
        if cx < 0 || cx >= self.cols as i32 || cy < 0 || cy >= self.rows as i32 {
            None
        } else {
            Some(cy as usize * self.cols + cx as usize)
        }
    }

    /// Rebuilds cell contents from `(entry, position)` pairs. Entries whose
    /// position falls outside the grid are dropped from the index (the world
    /// clamps positions, so this only loses non-finite ones).
    pub fn rebuild(&mut self, items: &[(u32, Vec3)]) {
        let cell_count = self.cols * self.rows;
        let mut counts = vec![0usize; cell_count];
        for &(_, pos) in items {
            if let Some(c) = self.cell_index(pos.x, pos.y) {
                counts[c] += 1;
            }
        }

        self.cell_offsets.resize(cell_count + 1, 0);
        let mut total = 0;
        for (c, &count) in counts.iter().enumerate() {
            self.cell_offsets[c] = total;
            total += count;
        }
        self.cell_offsets[cell_count] = total;

        self.entries.clear();
        self.entries.resize(total, 0);
        let mut cursor = self.cell_offsets[..cell_count].to_vec();
        for &(entry, pos) in items {
            if let Some(c) = self.cell_index(pos.x, pos.y) {
                self.entries[cursor[c]] = entry;
                cursor[c] += 1;
            }
        }
    }

    /// Collects every entry in cells touching the query circle into `out`.
    /// Candidates only; callers filter by exact distance.
    pub fn query_into(&self, x: f32, y: f32, radius: f32, out: &mut Vec<u32>) {
        out.clear();
        let min_cx = ((x - radius) / self.cell_size).floor() as i32;
        let max_cx = ((x + radius) / self.cell_size).floor() as i32;
        let min_cy = ((y - radius) / self.cell_size).floor() as i32;
        let max_cy = ((y + radius) / self.cell_size).floor() as i32;

        for cy in min_cy..=max_cy {
            if cy < 0 || cy >= self.rows as i32 {
                continue;
            }
            for cx in min_cx..=max_cx {
                if cx < 0 || cx >= self.cols as i32 {
                    continue;
                }
                let cell = cy as usize * self.cols + cx as usize;
                let start = self.cell_offsets[cell];
                let end = self.cell_offsets[cell + 1];
                out.extend_from_slice(&self.entries[start..end]);
            }
        }
    }
}
