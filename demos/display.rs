use plaindoc::{document, paragraph, row, table, Style};

const LOREM_IPSUM: &str = "\
Lorem ipsum dolor sit amet, consectetur adipisicing elit. Proin nibh augue,
suscipit a, scelerisque sed, lacinia in, mi. Cras vel lorem. Etiam
pellentesque aliquet tellus. Phasellus pharetra nulla ac diam. Quisque
semper justo at risus. Donec venenatis, turpis vel hendrerit interdum, dui
ligula ultricies purus, sed posuere libero dui id orci. Nam congue, pede
vitae dapibus aliquet, elit magna vulputate arcu, vel tempus metus leo non
est.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let lines: Vec<&str> = LOREM_IPSUM.lines().collect();

    let mut doc = document("Foo document").with_style(
        Style::new()
            .width(30)
            .column_sep("|")
            .item_sep(["%".repeat(30)]),
    );
    doc.push(paragraph(lines[..3].join("\n")));
    doc.push("AFX");

    let mut r = row(["foo", "bar"]);
    r.push("fRRRRRRRR");
    r.set(1, "xx011111%EU");
    let t = table("Foo table")
        .with_header(row(["FIRST", "SECOND", "THIRD"]))
        .with_rows([r, row(["this", "is", "something"])]);
    doc.push(t);
    doc.push(paragraph(lines[3..].join("\n")));

    match plaindoc::to_string(&doc, None) {
        Ok(text) => eprintln!("{text}"),
        Err(err) => eprintln!("render failed: {err}"),
    }
}
