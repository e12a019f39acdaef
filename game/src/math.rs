pub trait VectorMath {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn distance(self, other: Self) -> f32;
    fn length(self) -> f32;
    fn to_tile(self) -> [usize; 2];
}

impl VectorMath for [f32; 2] {
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1]]
    }

    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1]]
    }

    fn distance(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    fn length(self) -> f32 {
        (self[0] * self[0] + self[1] * self[1]).sqrt()
    }

    fn to_tile(self) -> [usize; 2] {
        [self[0].floor() as usize, self[1].floor() as usize]
    }
}

pub trait TileMath {
    fn position(self) -> [f32; 2];
}

impl TileMath for [usize; 2] {
    // tile center in world units
    fn position(self) -> [f32; 2] {
        [self[0] as f32 + 0.5, self[1] as f32 + 0.5]
    }
}
