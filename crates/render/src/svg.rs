use layers::markers::MarkerSprite;
use layers::regions::RegionShape;
use layers::tooltip::Tooltip;

use crate::frame::MapFrame;

/// Emits a frame as a standalone SVG document.
///
/// Drawing order is back to front: background, regions, marker glows and
/// cores, tooltip, notice. The tooltip group carries
/// `pointer-events="none"` so the label never steals hover from the marker
/// underneath it.
pub fn render_svg(frame: &MapFrame) -> String {
    let mut out = String::new();
    let w = frame.viewport_px.x;
    let h = frame.viewport_px.y;

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"0 0 {} {}\">\n",
        px(w),
        px(h),
        px(w),
        px(h),
    ));
    out.push_str(
        "  <defs>\n    <filter id=\"marker-glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" \
         height=\"200%\">\n      <feGaussianBlur stdDeviation=\"6\"/>\n    </filter>\n  </defs>\n",
    );
    out.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        px(w),
        px(h),
        escape_xml(&frame.background),
    ));

    for shape in &frame.regions.shapes {
        push_region(&mut out, shape);
    }
    for sprite in &frame.markers.sprites {
        push_marker(&mut out, sprite);
    }
    if let Some(tooltip) = &frame.tooltip {
        push_tooltip(&mut out, tooltip);
    }
    if let Some(notice) = &frame.notice {
        push_notice(&mut out, notice, w, h);
    }

    out.push_str("</svg>\n");
    out
}

fn push_region(out: &mut String, shape: &RegionShape) {
    let mut d = String::new();
    for ring in &shape.rings_px {
        if ring.len() < 3 {
            continue;
        }
        for (i, p) in ring.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{cmd}{} {} ", px(p.x), px(p.y)));
        }
        d.push_str("Z ");
    }
    if d.is_empty() {
        return;
    }

    out.push_str(&format!(
        "  <path d=\"{}\" fill=\"{}\" stroke=\"{}\" fill-rule=\"evenodd\"/>\n",
        d.trim_end(),
        shape.style.fill,
        shape.style.stroke,
    ));
}

fn push_marker(out: &mut String, sprite: &MarkerSprite) {
    let e = &sprite.encoding;
    if e.glow_radius <= 0.0 && e.marker_radius <= 0.0 {
        return;
    }
    let color = e.color.to_css();
    let cx = px(sprite.center_px.x);
    let cy = px(sprite.center_px.y);

    let glow_r = e.glow_radius * sprite.glow.scale;
    if glow_r > 0.0 {
        out.push_str(&format!(
            "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"{color}\" opacity=\"{}\" \
             filter=\"url(#marker-glow)\"/>\n",
            px(glow_r),
            px(e.opacity * sprite.glow.opacity_factor),
        ));
    }

    let core_r = e.marker_radius * sprite.core.scale;
    if core_r > 0.0 {
        out.push_str(&format!(
            "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"{color}\" opacity=\"{}\"/>\n",
            px(core_r),
            px(sprite.core.opacity_factor),
        ));
    }
}

fn push_tooltip(out: &mut String, tooltip: &Tooltip) {
    let style = &tooltip.style;
    let font = f64::from(style.font_size_px);
    let pad = f64::from(style.padding_px);
    // Monospace-ish width estimate; exact metrics need a font rasterizer.
    let text_w = font * 0.6 * tooltip.text.chars().count().max(1) as f64;

    out.push_str(&format!(
        "  <g transform=\"translate({}, {})\" pointer-events=\"none\">\n",
        px(tooltip.position_px.x),
        px(tooltip.position_px.y),
    ));
    out.push_str(&format!(
        "    <rect width=\"{}\" height=\"{}\" rx=\"5\" fill=\"#FFF\"/>\n",
        px(text_w + pad * 2.0),
        px(font + pad * 2.0),
    ));
    out.push_str(&format!(
        "    <text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"bold\" \
         fill=\"#000\">{}</text>\n",
        px(pad),
        px(pad + font * 0.8),
        px(font),
        escape_xml(&tooltip.text),
    ));
    out.push_str("  </g>\n");
}

fn push_notice(out: &mut String, notice: &str, w: f64, h: f64) {
    out.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"16\" \
         fill=\"#FFF\">{}</text>\n",
        px(w * 0.5),
        px(h * 0.5),
        escape_xml(notice),
    ));
}

fn px(value: f64) -> String {
    format!("{value:.2}")
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
