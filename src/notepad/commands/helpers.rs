use crate::error::{NotepadError, Result};
use crate::store::DataStore;

/// Parses the leading position argument, if any.
///
/// A non-numeric position reports the whole argument list, so
/// `update abc text` fails with `Invalid position: abc text`.
pub fn parse_position(args: &[String]) -> Result<Option<i64>> {
    let Some(first) = args.first() else {
        return Ok(None);
    };
    first
        .parse::<i64>()
        .map(Some)
        .map_err(|_| NotepadError::InvalidPosition(args.join(" ")))
}

/// Rejects positions outside `[1, capacity]`.
///
/// This is checked against the configured capacity, not the number of notes
/// currently stored; callers check the live length separately.
pub fn check_bounds<S: DataStore>(store: &S, position: i64) -> Result<()> {
    let max = store.capacity().get();
    if position < 1 || position as u64 > max as u64 {
        return Err(NotepadError::OutOfBounds { position, max });
    }
    Ok(())
}

/// Converts a 1-based position already inside `[1, capacity]` to a 0-based
/// index, failing when it points past the last stored note.
pub fn live_index<S: DataStore>(store: &S, position: i64, action: &'static str) -> Result<usize> {
    let index = (position - 1) as usize;
    if index >= store.len() {
        return Err(NotepadError::NothingTo(action));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn missing_position_is_none() {
        assert_eq!(parse_position(&[]).unwrap(), None);
    }

    #[test]
    fn numeric_position_parses() {
        assert_eq!(parse_position(&args(&["3", "x"])).unwrap(), Some(3));
        assert_eq!(parse_position(&args(&["-2"])).unwrap(), Some(-2));
    }

    #[test]
    fn invalid_position_reports_all_args() {
        let err = parse_position(&args(&["abc", "text"])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid position: abc text");
    }

    #[test]
    fn bounds_follow_capacity_not_length() {
        let fixture = StoreFixture::new(5).with_notes(&["a"]);
        assert!(check_bounds(&fixture.store, 1).is_ok());
        assert!(check_bounds(&fixture.store, 5).is_ok());
        assert!(matches!(
            check_bounds(&fixture.store, 6),
            Err(NotepadError::OutOfBounds { position: 6, max: 5 })
        ));
        assert!(check_bounds(&fixture.store, 0).is_err());
    }

    #[test]
    fn live_index_rejects_positions_past_the_end() {
        let fixture = StoreFixture::new(5).with_notes(&["a", "b"]);
        assert_eq!(live_index(&fixture.store, 2, "delete").unwrap(), 1);
        assert!(matches!(
            live_index(&fixture.store, 3, "delete"),
            Err(NotepadError::NothingTo("delete"))
        ));
    }
}
