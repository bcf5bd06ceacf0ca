/*
 * Unit tests for the request tracker
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_register_and_query
 * - test_register_out_of_range
 * - test_register_is_idempotent
 * - test_clear_absent_is_noop
 * - test_directional_queries
 * - test_nearest_queries
 * - test_pending_views
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod requests_tests {
    use crate::elevator::requests::{RequestError, RequestTracker};

    #[test]
    fn test_register_and_query() {
        // Arrange
        let mut requests = RequestTracker::new(5);
        assert!(!requests.has_pending());

        // Act
        requests.register(3).unwrap();

        // Assert
        assert!(requests.has_pending());
        assert!(requests.is_pending(3));
        assert!(!requests.is_pending(2));

        // Act
        requests.clear(3);

        // Assert
        assert!(!requests.has_pending());
        assert!(!requests.is_pending(3));
    }

    #[test]
    fn test_register_out_of_range() {
        // Arrange
        let mut requests = RequestTracker::new(5);

        // Act
        let result = requests.register(5);

        // Assert
        assert_eq!(
            result,
            Err(RequestError::InvalidFloor {
                floor: 5,
                n_floors: 5
            })
        );
        assert!(!requests.has_pending());
    }

    #[test]
    fn test_register_is_idempotent() {
        // Arrange
        let mut requests = RequestTracker::new(5);

        // Act
        requests.register(2).unwrap();
        requests.register(2).unwrap();
        requests.clear(2);

        // Assert
        assert!(!requests.is_pending(2));
    }

    #[test]
    fn test_clear_absent_is_noop() {
        // Arrange
        let mut requests = RequestTracker::new(5);
        requests.register(1).unwrap();

        // Act
        requests.clear(4);
        requests.clear(200);

        // Assert
        assert!(requests.is_pending(1));
        assert_eq!(requests.pending_floors(), vec![1]);
    }

    #[test]
    fn test_directional_queries() {
        // Arrange
        let mut requests = RequestTracker::new(5);
        requests.register(1).unwrap();
        requests.register(4).unwrap();

        // Assert
        assert!(requests.any_pending_above(2));
        assert!(requests.any_pending_below(2));
        assert!(!requests.any_pending_above(4));
        assert!(!requests.any_pending_below(1));

        // The current floor itself is on neither side
        assert!(requests.any_pending_above(1));
        assert!(requests.any_pending_below(4));
    }

    #[test]
    fn test_nearest_queries() {
        // Arrange
        let mut requests = RequestTracker::new(10);
        requests.register(1).unwrap();
        requests.register(3).unwrap();
        requests.register(7).unwrap();

        // Assert
        assert_eq!(requests.nearest_above(3), Some(7));
        assert_eq!(requests.nearest_above(0), Some(1));
        assert_eq!(requests.nearest_above(7), None);
        assert_eq!(requests.nearest_below(3), Some(1));
        assert_eq!(requests.nearest_below(7), Some(3));
        assert_eq!(requests.nearest_below(1), None);
    }

    #[test]
    fn test_pending_views() {
        // Arrange
        let mut requests = RequestTracker::new(4);
        requests.register(0).unwrap();
        requests.register(2).unwrap();

        // Assert
        assert_eq!(requests.pending_floors(), vec![0, 2]);
        assert_eq!(requests.pending_mask(), vec![true, false, true, false]);
        assert_eq!(requests.n_floors(), 4);
    }
}
