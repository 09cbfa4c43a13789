// Claims regions cut off from the grid boundary by a player's cells.

/// Indices of every cell that cannot reach the grid boundary without crossing a
/// cell equal to `target`, excluding cells that already equal `target`.
///
/// `grid` is row-major with rows of `width` cells. Boundary cells are seeds and
/// therefore never returned.
pub fn enclosed_cells(grid: &[u8], width: usize, target: u8) -> Vec<usize> {
    // Empty or ragged grids have no well-defined boundary.
    if width == 0 || grid.len() < width || grid.len() % width != 0 {
        return Vec::new();
    }
    let height = grid.len() / width;

    let mut reachable = vec![false; grid.len()];
    let mut stack: Vec<usize> = Vec::new();

    let top = 0..width;
    let bottom = (0..width).map(|x| (height - 1) * width + x);
    let left = (0..height).map(|y| y * width);
    let right = (0..height).map(|y| y * width + width - 1);

    for seed in top.chain(bottom).chain(left).chain(right) {
        // Seeds already reached by an earlier flood add nothing new.
        if reachable[seed] || grid[seed] == target {
            continue;
        }
        reachable[seed] = true;
        stack.push(seed);

        while let Some(index) = stack.pop() {
            let x = index % width;
            let y = index / width;

            let neighbours = [
                (x + 1 < width).then(|| index + 1),
                (x > 0).then(|| index - 1),
                (y + 1 < height).then(|| index + width),
                (y > 0).then(|| index - width),
            ];
            for next in neighbours.into_iter().flatten() {
                if !reachable[next] && grid[next] != target {
                    reachable[next] = true;
                    stack.push(next);
                }
            }
        }
    }

    (0..grid.len())
        .filter(|&i| grid[i] != target && !reachable[i])
        .collect()
}

/// Returns a copy of `grid` with every enclosed cell reassigned to `target`.
pub fn fill_enclosed(grid: &[u8], width: usize, target: u8) -> Vec<u8> {
    let mut filled = grid.to_vec();
    for index in enclosed_cells(grid, width, target) {
        filled[index] = target;
    }
    filled
}
