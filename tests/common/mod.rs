#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Load a command fixture from test_data/
pub fn load_fixture(name: &str) -> Vec<String> {
    let path = Path::new("./test_data").join(name);
    let contents = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    contents.lines().map(str::to_string).collect()
}

fn map_direction(lines: &[String], mapping: fn(&str) -> &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| match line.split_once(' ') {
            Some((dir, count)) => format!("{} {}", mapping(dir), count),
            None => line.clone(),
        })
        .collect()
}

/// Flip commands horizontally (mirror left-right)
pub fn flip_horizontal(lines: &[String]) -> Vec<String> {
    map_direction(lines, |d| match d {
        "R" => "L",
        "L" => "R",
        other => other,
    })
}

/// Flip commands vertically (mirror top-bottom)
pub fn flip_vertical(lines: &[String]) -> Vec<String> {
    map_direction(lines, |d| match d {
        "U" => "D",
        "D" => "U",
        other => other,
    })
}

/// Swap the axes (mirror across the diagonal)
pub fn transpose(lines: &[String]) -> Vec<String> {
    map_direction(lines, |d| match d {
        "R" => "U",
        "U" => "R",
        "L" => "D",
        "D" => "L",
        other => other,
    })
}

/// The original commands plus every mirrored variant
pub fn variants(lines: &[String]) -> Vec<(&'static str, Vec<String>)> {
    vec![
        ("original", lines.to_vec()),
        ("h_flip", flip_horizontal(lines)),
        ("v_flip", flip_vertical(lines)),
        ("hv_flip", flip_vertical(&flip_horizontal(lines))),
        ("transpose", transpose(lines)),
    ]
}
