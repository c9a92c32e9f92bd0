use core::str::FromStr;

use crate::direction::Direction;

/// Builds a vector of `length` elements, each produced independently by `generator(index)`.
pub fn make_grid<T, F: FnMut(usize) -> T>(length: usize, generator: F) -> Vec<T> {
    (0..length).map(generator).collect()
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<usize>()
            .map_err(|_| format!("invalid width: {}", raw_width))?;
        let height = raw_height
            .parse::<usize>()
            .map_err(|_| format!("invalid height: {}", raw_height))?;

        Ok(Size { width, height })
    }
}

/// Rectangular storage addressed by `(x, y)`, where `x` is the column and `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    pos: usize,
}

impl<T> Grid<T> {
    pub fn new<F: FnMut(usize, usize) -> T>(width: usize, height: usize, initializer: &mut F) -> Self {
        let mut data = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                data.push(initializer(x, y));
            }
        }

        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    pub fn iter(&self) -> GridIter<T> {
        GridIter { grid: self, pos: 0 }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(x + (y * self.width))
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|index| &self.data[index])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let index = self.index(x, y)?;

        self.data.get_mut(index)
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), &'static str> {
        let index = self.index(x, y).ok_or("Cell out of range")?;

        self.data[index] = value;

        Ok(())
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Grid<U> {
        Grid {
            data: self.data.iter().map(&mut f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn get_neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<&T> {
        let (x, y) = match direction {
            Direction::None => Some((x, y)),
            Direction::Up => y.checked_sub(1).map(|y| (x, y)),
            Direction::Down => Some((x, y + 1)),
            Direction::Left => x.checked_sub(1).map(|x| (x, y)),
            Direction::Right => Some((x + 1, y)),
        }?;

        self.get(x, y)
    }
}

impl<T: Clone> Grid<T> {
    /// Rotates the grid by `count` quarter turns.
    ///
    /// One turn maps `(x, y)` of a `w × h` grid onto `(y, w - 1 - x)` of an `h × w` grid,
    /// so the right edge ends up on top. The count is taken mod 4 and a count of zero
    /// performs four turns, always producing a freshly built grid.
    pub fn rotate(&self, count: usize) -> Grid<T> {
        let turns = match count % 4 {
            0 => 4,
            n => n,
        };

        let mut output = self.quarter_turn();

        for _ in 1..turns {
            output = output.quarter_turn();
        }

        output
    }

    fn quarter_turn(&self) -> Grid<T> {
        let width = self.width;

        Grid::new(self.height, self.width, &mut |x, y| {
            self.data[(width - 1 - y) + x * width].clone()
        })
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.grid.data.len() {
            None
        } else {
            let x = self.pos % self.grid.width;
            let y = self.pos / self.grid.width;
            let value = &self.grid.data[self.pos];

            self.pos += 1;

            Some((x, y, value))
        }
    }
}
