//! Geometric properties of computed layouts

use sudoku_sheets::layout::{
    compute_layout, find_overlap, LayoutError, Orientation, PageSpec, Paper,
};

fn pages() -> Vec<PageSpec> {
    let mut pages = Vec::new();
    for paper in [Paper::A4, Paper::A5, Paper::Letter, Paper::Legal] {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            for margin in [0.0, 4.0, 10.0] {
                pages.push(PageSpec::from_paper(paper, orientation).with_margin(margin));
            }
        }
    }
    pages
}

#[test]
fn test_positive_side_and_no_overlap() {
    for page in pages() {
        for nx in 1..=6 {
            for ny in 1..=6 {
                let plan = compute_layout(&page, nx, ny)
                    .unwrap_or_else(|e| panic!("{:?} {}x{}: {}", page, nx, ny, e));
                assert!(plan.side_length > 0.0);
                assert_eq!(plan.tiles.len(), nx * ny);
                assert_eq!(
                    find_overlap(&plan),
                    None,
                    "overlap on {:?} with {}x{}",
                    page,
                    nx,
                    ny
                );
            }
        }
    }
}

#[test]
fn test_adjacent_origins_at_least_one_side_apart() {
    let plan = compute_layout(&PageSpec::default(), 4, 3).unwrap();
    for column in 0..3 {
        for row in 0..3 {
            let a = plan.tile(column, row).unwrap().origin;
            let right = plan.tile(column + 1, row).unwrap().origin;
            assert!(right.x - a.x >= plan.side_length);
        }
    }
    for column in 0..4 {
        for row in 0..2 {
            let a = plan.tile(column, row).unwrap().origin;
            let below = plan.tile(column, row + 1).unwrap().origin;
            assert!(below.y - a.y >= plan.side_length);
        }
    }
}

#[test]
fn test_side_length_shrinks_with_more_tiles() {
    for page in pages() {
        for n in 1..8 {
            let base = compute_layout(&page, n, n).unwrap().side_length;
            let wider = compute_layout(&page, n + 1, n).unwrap().side_length;
            let taller = compute_layout(&page, n, n + 1).unwrap().side_length;
            assert!(wider <= base, "{:?}: nx {} -> {}", page, n, n + 1);
            assert!(taller <= base, "{:?}: ny {} -> {}", page, n, n + 1);
        }
    }
}

#[test]
fn test_tiles_stay_inside_page() {
    for page in pages() {
        let plan = compute_layout(&page, 3, 4).unwrap();
        for tile in &plan.tiles {
            let b = plan.tile_bounds(tile);
            assert!(b.x >= 3.0 * page.margin);
            assert!(b.right() <= page.width - page.margin);
            assert!(b.y >= page.margin);
            assert!(b.bottom() <= page.height - page.margin);
        }
    }
}

#[test]
fn test_stroke_widths_scale_with_side() {
    let plan = compute_layout(&PageSpec::default(), 2, 2).unwrap();
    assert!((plan.thin_width * 300.0 - plan.side_length).abs() < 1e-9);
    assert!((plan.thick_width * 120.0 - plan.side_length).abs() < 1e-9);
    assert!(plan.thick_width > plan.thin_width);
}

#[test]
fn test_a4_landscape_scenario() {
    let plan = compute_layout(&PageSpec::new(297.0, 210.0, 4.0), 1, 1).unwrap();
    assert!((plan.side_length - 171.7).abs() < 1e-9);
    let origin = plan.tiles[0].origin;
    assert!((origin.x - 66.65).abs() < 1e-9);
    assert!((origin.y - 19.15).abs() < 1e-9);
}

#[test]
fn test_zero_grid_rejected() {
    assert_eq!(
        compute_layout(&PageSpec::default(), 0, 1).unwrap_err(),
        LayoutError::InvalidGrid { nx: 0, ny: 1 }
    );
}
