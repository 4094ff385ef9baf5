use console::Style;
use prism_core::filters::{FilterParams, FilterType};
use prism_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Prism Spectral Filter"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(21)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value
            .apply_to(format!("{}x{}", config.resolution, config.resolution))
    );
    println!();

    print_filter_section(&s, &config.filter);
}

fn print_filter_section(s: &Styles, filter: &FilterParams) {
    println!("  {}", s.header.apply_to("Filter"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Type"),
        s.method.apply_to(filter.filter_type)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Strength"),
        s.value.apply_to(format!("{:.2}", filter.strength))
    );
    match filter.filter_type {
        FilterType::BandPass => println!(
            "    {:<12}{}",
            s.label.apply_to("Center"),
            s.value.apply_to(format!("{:.3}", filter.radius))
        ),
        FilterType::Directional => println!(
            "    {:<12}{}",
            s.label.apply_to("Direction"),
            s.value
                .apply_to(format!("{:.1}\u{b0}", filter.direction.to_degrees()))
        ),
        FilterType::LowPass | FilterType::HighPass => {}
    }
    if filter.show_spectrum {
        println!(
            "    {:<12}{}",
            s.label.apply_to("View"),
            s.method.apply_to("log-magnitude spectrum")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("View"),
            s.value.apply_to("filtered image")
        );
    }
    println!();
}
