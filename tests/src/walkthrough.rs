#![cfg(test)]
use std::thread;

use scaffold_core::demo::{self, DemoReport};
use scaffold_core::{Calculator, text};

#[test]
fn full_demo_report() {
    let report: DemoReport = demo::full_demo().unwrap();
    assert_eq!(report.operands, (10.5, 3.2));

    let labels: Vec<&str> = report.arithmetic.iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        ["Addition", "Subtraction", "Multiplication", "Division", "Power", "Square root"]
    );
    assert!((report.arithmetic[0].value - 13.7).abs() < 1e-12);
    assert!((report.arithmetic[3].value - 10.5 / 3.2).abs() < 1e-12);

    assert_eq!(report.text.trimmed, "Hello, World!");
    assert_eq!(report.text.parts, ["apple", "banana", "cherry", "date"]);
    assert_eq!(report.text.joined, "Hello beautiful world");
}

#[test]
fn libraries_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let calc = Calculator::new();
                let value = calc.divide(f64::from(i) * 3.0, 3.0).unwrap();
                let word = text::to_upper(&format!("worker{i}"));
                (value, word)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (value, word) = handle.join().unwrap();
        assert_eq!(value, i as f64);
        assert_eq!(word, format!("WORKER{i}"));
    }
}
