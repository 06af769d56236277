#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

pub static PRESETS: [Preset; 3] = [
    Preset {
        name: "list",
        title: "Keyed list",
        source: r#"<ul>
  <li key="a">Item A</li>
  <li key="b">Item B</li>
  <li key="c">Item C</li>
</ul>"#,
    },
    Preset {
        name: "nested",
        title: "Nested components",
        source: "<div>
  <header>
    <h1>Title</h1>
  </header>
  <main>
    <p>Content</p>
  </main>
</div>",
    },
    Preset {
        name: "form",
        title: "Form structure",
        source: "<form>
  <input />
  <input />
  <button>Submit</button>
</form>",
    },
];

pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}
