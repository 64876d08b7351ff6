use crate::snakegame::types::Coord;

/// Grid distance ignoring anything in the way.
#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let origin = Coord::new(0, 0);
        assert_eq!(manhattan_distance(origin, origin), 0);
        assert_eq!(manhattan_distance(origin, Coord::new(3, -4)), 7);
        assert_eq!(manhattan_distance(Coord::new(-1, 2), Coord::new(2, 0)), 5);
    }
}
