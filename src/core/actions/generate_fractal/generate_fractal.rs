use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` at every cell of its grid in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    algorithm
        .grid_size()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::point::Point;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "stub error")
        }
    }

    impl std::error::Error for StubError {}

    struct StubSuccessAlgorithm {
        grid_size: GridSize,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = Point;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Point, StubError> {
            Ok(pixel)
        }

        fn grid_size(&self) -> GridSize {
            self.grid_size
        }
    }

    struct StubFailingAlgorithm {
        grid_size: GridSize,
        fail_at: Point,
    }

    impl FractalAlgorithm for StubFailingAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<u32, StubError> {
            if pixel == self.fail_at {
                Err(StubError)
            } else {
                Ok(1)
            }
        }

        fn grid_size(&self) -> GridSize {
            self.grid_size
        }
    }

    #[test]
    fn test_generates_every_cell_row_major() {
        let algorithm = StubSuccessAlgorithm {
            grid_size: GridSize::new(2, 2).unwrap(),
        };

        let results = generate_fractal(&algorithm).unwrap();

        assert_eq!(
            results,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 1, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
            ]
        );
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubFailingAlgorithm {
            grid_size: GridSize::new(4, 4).unwrap(),
            fail_at: Point { x: 3, y: 2 },
        };

        assert_eq!(generate_fractal(&algorithm), Err(StubError));
    }
}
