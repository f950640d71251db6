mod common;

use common::fixtures::*;
use common::{TestResult, generate_pages, init_logger, page};
use folio::render::DrawOperation;
use folio::{
    Column, GenerationError, GeneratorBuilder, LayoutConfig, LayoutError, Padding, PageBreak,
    Position, Rectangle, Size, SvgImageElement,
};

fn rectangle_origins(page: &folio::PageRecording) -> Vec<Position> {
    page.picture.rectangles().map(|(origin, _)| origin).collect()
}

#[test]
fn test_three_blocks_split_over_two_pages() -> TestResult {
    init_logger();

    let pages = generate_pages(boxed(blocks(3, 50.0, 40.0, 0.0)), page(100.0, 90.0))?;

    assert_eq!(pages.len(), 2);
    assert_eq!(
        rectangle_origins(&pages[0]),
        vec![Position::new(0.0, 0.0), Position::new(0.0, 40.0)]
    );
    assert_eq!(rectangle_origins(&pages[1]), vec![Position::new(0.0, 0.0)]);
    Ok(())
}

#[test]
fn test_explicit_page_breaks() -> TestResult {
    init_logger();

    let content = Column::new(5.0)
        .item(Rectangle::new(20.0, 20.0))
        .item(PageBreak::new())
        .item(Rectangle::new(20.0, 20.0))
        .item(PageBreak::new())
        .item(Rectangle::new(20.0, 20.0));

    let pages = generate_pages(boxed(content), page(100.0, 100.0))?;
    assert_eq!(pages.len(), 3);
    for recorded in &pages {
        assert_eq!(rectangle_origins(recorded), vec![Position::new(0.0, 0.0)]);
    }
    Ok(())
}

#[test]
fn test_nested_padding_offsets_content() -> TestResult {
    init_logger();

    let content = Padding::new(10.0, 5.0, 10.0, 5.0).child(blocks(4, 30.0, 30.0, 10.0));
    let pages = generate_pages(boxed(content), page(100.0, 100.0))?;

    // 90pt of inner height holds the first two blocks and the spacing between them
    assert_eq!(pages.len(), 2);
    assert_eq!(
        rectangle_origins(&pages[0]),
        vec![Position::new(10.0, 5.0), Position::new(10.0, 45.0)]
    );
    assert_eq!(rectangle_origins(&pages[1]).len(), 2);
    Ok(())
}

#[test]
fn test_nested_columns_resume_independently() -> TestResult {
    init_logger();

    let content = Column::new(0.0)
        .item(blocks(3, 10.0, 30.0, 0.0))
        .item(blocks(3, 20.0, 30.0, 0.0));
    let pages = generate_pages(boxed(content), page(100.0, 70.0))?;

    let per_page: Vec<_> = pages.iter().map(|p| p.picture.rectangles().count()).collect();
    assert_eq!(per_page, vec![2, 2, 2]);

    let widths: Vec<_> = pages[1].picture.rectangles().map(|(_, size)| size.width).collect();
    assert_eq!(widths, vec![10.0, 20.0]);
    Ok(())
}

#[test]
fn test_svg_is_scaled_to_the_page() -> TestResult {
    let content = SvgImageElement::new(svg("50", "45"));
    let pages = generate_pages(boxed(content), page(100.0, 90.0))?;

    assert_eq!(pages.len(), 1);
    let command = &pages[0].picture.commands[0];
    assert!(matches!(command.operation, DrawOperation::Svg { .. }));
    assert_eq!((command.transform.sx, command.transform.sy), (2.0, 2.0));
    Ok(())
}

#[test]
fn test_oversized_content_reports_a_trace() {
    init_logger();

    let content = Column::new(0.0)
        .item(Rectangle::new(50.0, 40.0))
        .item(Padding::all(5.0).child(Rectangle::new(50.0, 200.0)));

    let error = generate_pages(boxed(content), page(100.0, 100.0)).unwrap_err();
    let GenerationError::Layout(LayoutError::ContentDoesNotFit { page_number, .. }) = &error else {
        panic!("expected ContentDoesNotFit, got {:?}", error);
    };
    assert_eq!(*page_number, 2);

    let trace = error.layout_trace().expect("trace attached");
    let path: Vec<_> = trace.failing_path().iter().map(|t| t.element.as_str()).collect();
    assert_eq!(path, vec!["Column", "Padding", "Rectangle"]);
    assert_eq!(
        trace.failing_path()[2].available_space,
        Size::new(90.0, 90.0)
    );
}

#[test]
fn test_endless_content_is_stopped() {
    let mut generator = GeneratorBuilder::new()
        .with_page_size(page(10.0, 10.0))
        .with_config(LayoutConfig {
            max_pages: 25,
            ..LayoutConfig::default()
        })
        .with_content(Endless)
        .build()
        .unwrap();

    let result = generator.page_count();
    assert!(matches!(
        result,
        Err(GenerationError::Layout(LayoutError::InfiniteDocument(25)))
    ));
}

#[test]
fn test_settings_json_drives_generation() -> TestResult {
    let settings = r#"{
        "pageSize": { "width": 90, "height": 100 },
        "landscape": true,
        "maxPages": 10,
        "cacheMeasurements": false
    }"#;

    let mut generator = GeneratorBuilder::new()
        .with_settings_json(settings)?
        .with_content(blocks(3, 50.0, 40.0, 0.0))
        .build()?;

    assert_eq!(generator.page_size(), Size::new(100.0, 90.0));
    assert_eq!(generator.page_count()?, 2);
    Ok(())
}

#[test]
fn test_generation_is_repeatable_and_cache_independent() -> TestResult {
    let content = || {
        Column::new(3.0)
            .item(blocks(5, 40.0, 25.0, 2.0))
            .item(Padding::all(4.0).child(blocks(3, 30.0, 30.0, 1.0)))
            .item(PageBreak::new())
            .item(blocks(2, 60.0, 10.0, 0.0))
    };

    let mut cached = GeneratorBuilder::new()
        .with_page_size(page(100.0, 100.0))
        .with_content(content())
        .build()?;
    let mut uncached = GeneratorBuilder::new()
        .with_page_size(page(100.0, 100.0))
        .with_config(LayoutConfig {
            cache_measurements: false,
            ..LayoutConfig::default()
        })
        .with_content(content())
        .build()?;

    let first = cached.generate_recording()?;
    let second = cached.generate_recording()?;
    let reference = uncached.generate_recording()?;

    assert_eq!(first, second);
    assert_eq!(first, reference);
    Ok(())
}
