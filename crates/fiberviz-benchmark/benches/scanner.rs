use std::hint::black_box;

use codspeed_criterion_compat::{Criterion, Throughput, criterion_group, criterion_main};
use fiberviz_scanner::extract_child_tags;

static SIBLINGS: &str = r#"
<li key="a">Item A</li> <li key="b">Item B</li> <li key="c">Item C</li> <li key="d">Item D</li>
<li key="e">Item E</li> <li key="f">Item F</li> <li key="g">Item G</li> <li key="h">Item H</li>
<li key="i">Item I</li> <li key="j">Item J</li> <li key="k">Item K</li> <li key="l">Item L</li>
<li key="m">Item M</li> <li key="n">Item N</li> <li key="o">Item O</li> <li key="p">Item P</li>
"#;

static SELF_CLOSING: &str = "
<input /><input /><br/><img key=\"x\"/> text between <input /><input /><br/><img key=\"y\"/>
<input /><input /><br/><img key=\"x\"/> text between <input /><input /><br/><img key=\"y\"/>
<input /><input /><br/><img key=\"x\"/> text between <input /><input /><br/><img key=\"y\"/>
";

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let nested = format!("{}leaf{}", "<div>".repeat(64), "</div>".repeat(64));
    let candidates =
        [("siblings", SIBLINGS), ("self_closing", SELF_CLOSING), ("nested", nested.as_str())];

    for (name, source) in candidates {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| black_box(extract_child_tags(s))));
    }

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
