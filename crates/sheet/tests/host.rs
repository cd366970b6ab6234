use sheetrows_core::{cells, CellValue, GridRange, HostError, SheetGrid, SpreadsheetHost};
use sheetrows_sheet::{Book, MemoryHost, Sheet, SheetError};

fn scores() -> MemoryHost {
    let host = MemoryHost::new();
    host.add_sheet(
        "Scores",
        vec![cells!["Name", "Score"], cells!["Ann", 10], cells!["Bob", 7]],
    )
    .unwrap();
    host
}

// Exercises a host only through the traits, the way table code does.
fn copy_used_range<S: SheetGrid>(from: &S, to: &S) -> Result<(), HostError> {
    let Some(range) = from.data_range() else {
        return Ok(());
    };
    let values = from.values(range)?;
    to.set_values(range, &values)?;
    to.flush()
}

#[test]
fn test_copy_through_traits() {
    let host = scores();
    host.add_sheet::<CellValue>("Copy", Vec::new()).unwrap();

    let from = host.sheet_by_name("Scores").unwrap();
    let to = host.sheet_by_name("Copy").unwrap();
    copy_used_range(&from, &to).unwrap();

    assert_eq!(
        host.snapshot("Copy").unwrap().used_values(),
        host.snapshot("Scores").unwrap().used_values()
    );
    assert_eq!(host.flush_count(), 1);
}

#[test]
fn test_append_after_last_row() {
    let host = scores();
    let sheet = host.sheet_by_name("Scores").unwrap();

    let range = GridRange::new(sheet.last_row() + 1, 1, 1, 2).unwrap();
    sheet.set_values(range, &[cells!["Cy", 3]]).unwrap();

    assert_eq!(sheet.last_row(), 4);
    assert_eq!(
        host.snapshot("Scores").unwrap().row(3).unwrap(),
        &cells!["Cy", 3]
    );
}

#[test]
fn test_clear_then_extent_shrinks() {
    let host = scores();
    let sheet = host.sheet_by_name("Scores").unwrap();

    sheet.clear_content(GridRange::new(2, 1, 2, 2).unwrap()).unwrap();
    assert_eq!(sheet.last_row(), 1);
    assert_eq!(sheet.last_column(), 2);
}

#[test]
fn test_protected_sheet_through_host() {
    let host = scores();
    host.with_sheet_mut("Scores", |sheet| sheet.set_protected(true))
        .unwrap();
    let sheet = host.sheet_by_name("Scores").unwrap();

    let err = sheet
        .set_values(GridRange::cell(1, 1).unwrap(), &[cells!["x"]])
        .unwrap_err();
    assert!(matches!(err, HostError::PermissionDenied { .. }));

    // Reads still work.
    assert_eq!(
        sheet.values(GridRange::cell(1, 1).unwrap()).unwrap(),
        vec![cells!["Name"]]
    );
}

#[test]
fn test_host_from_book() {
    let mut book = Book::with_name("Budget");
    book.add_sheet("Q1", Sheet::from_data(vec![cells!["Item", "Cost"]]))
        .unwrap();
    let host = MemoryHost::from_book(book);

    assert_eq!(host.sheet_names(), vec!["Q1".to_string()]);
    assert_eq!(host.sheet_by_name("Q1").unwrap().name(), "Q1");
}

#[test]
fn test_sheet_errors_map_to_host_errors() {
    let err: HostError = SheetError::SheetNotFound {
        name: "Gone".to_string(),
    }
    .into();
    assert_eq!(
        err,
        HostError::SheetNotFound {
            name: "Gone".to_string()
        }
    );

    let err: HostError = SheetError::RowIndexOutOfBounds { index: 9, count: 1 }.into();
    assert!(matches!(err, HostError::Other(message) if message.contains("9")));
}
