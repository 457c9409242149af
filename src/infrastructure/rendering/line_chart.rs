use crate::domain::{
    logging::{LogComponent, get_logger},
    orders::DateSeries,
};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Series color carried over from the dashboard palette
const SERIES_COLOR: &str = "#84aee5";
const BACKGROUND_COLOR: &str = "#ffffff";
const SCALE_TEXT_COLOR: &str = "#8a8f98";
const NO_DATA_COLOR: &str = "#b0b4bb";

/// Максимум подписей дат на оси X
const MAX_DATE_LABELS: usize = 12;

/// Данные для рендеринга одной точки (предвычислено)
#[derive(Debug, Clone)]
struct PointRenderData {
    x: f64,
    y: f64,
    label: String,
}

/// Параметры масштабирования для всего графика
#[derive(Debug, Clone)]
struct ScaleParams {
    padding: f64,
    chart_height: f64,
    min_value: f64,
    max_value: f64,
    value_range: f64,
    step_x: f64,
}

/// Canvas 2D renderer for the per-date cost line chart
pub struct LineChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window not available"))?;
        let document =
            window.document().ok_or_else(|| JsValue::from_str("Document not available"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to get canvas element"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render the date/cost series as a single-color line
    pub fn render(&self, series: &DateSeries) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;

        // Clear canvas
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(BACKGROUND_COLOR));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        if series.is_empty() {
            self.render_no_data_message(&context)?;
            return Ok(());
        }

        let start_time = performance_now();

        let params = self.calculate_scale_params(series);
        let points: Vec<PointRenderData> = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| self.calculate_point_render_data(i, point.date.value(), point.sum.value(), &params))
            .collect();

        self.render_series_line(&context, &points);
        self.render_value_scale(&context, &params)?;
        self.render_date_labels(&context, &points, &params)?;

        get_logger().debug(
            LogComponent::Infrastructure("LineChartRenderer"),
            &format!("📈 Rendered {} points in {:.1}ms", points.len(), performance_now() - start_time),
        );

        Ok(())
    }

    /// Вычисляем параметры масштабирования один раз для всех точек
    fn calculate_scale_params(&self, series: &DateSeries) -> ScaleParams {
        let padding = 40.0;
        let chart_width = self.width as f64 - (padding * 2.0);
        let chart_height = self.height as f64 - (padding * 2.0);

        let (min_value, max_value) = series.value_range().unwrap_or((0.0, 0.0));

        // flat series: pretend one unit of range so the line sits mid-chart
        let value_range = if (max_value - min_value).abs() < f64::EPSILON {
            1.0
        } else {
            max_value - min_value
        };

        let step_x = chart_width / series.len() as f64;

        ScaleParams { padding, chart_height, min_value, max_value, value_range, step_x }
    }

    /// Place a point inside its date slot (Y grows down, so invert)
    fn calculate_point_render_data(
        &self,
        index: usize,
        label: &str,
        value: f64,
        params: &ScaleParams,
    ) -> PointRenderData {
        let x = params.padding + (index as f64 * params.step_x) + (params.step_x / 2.0);

        // flat series draws mid-chart, everything else scales into the band
        let y = if (params.max_value - params.min_value).abs() < f64::EPSILON {
            params.padding + params.chart_height / 2.0
        } else {
            params.padding
                + ((params.max_value - value) / params.value_range) * params.chart_height
        };

        PointRenderData { x, y, label: label.to_string() }
    }

    fn render_series_line(&self, context: &CanvasRenderingContext2d, points: &[PointRenderData]) {
        context.set_stroke_style(&JsValue::from(SERIES_COLOR));
        context.set_fill_style(&JsValue::from(SERIES_COLOR));
        context.set_line_width(2.0);

        if points.len() == 1 {
            // a one-date series has no segment to draw, mark the point itself
            let point = &points[0];
            context.begin_path();
            let _ = context.arc(point.x, point.y, 3.0, 0.0, std::f64::consts::TAU);
            context.fill();
            return;
        }

        context.begin_path();
        context.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            context.line_to(point.x, point.y);
        }
        context.stroke();
    }

    fn render_value_scale(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(SCALE_TEXT_COLOR));
        context.set_font("12px Arial");

        let max_text = format!("${:.2}", params.max_value);
        context.fill_text(&max_text, 5.0, params.padding + 4.0)?;

        let min_text = format!("${:.2}", params.min_value);
        context.fill_text(&min_text, 5.0, params.padding + params.chart_height)?;

        Ok(())
    }

    fn render_date_labels(
        &self,
        context: &CanvasRenderingContext2d,
        points: &[PointRenderData],
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(SCALE_TEXT_COLOR));
        context.set_font("11px Arial");

        // thin out labels on dense charts instead of overlapping them
        let stride = points.len().div_ceil(MAX_DATE_LABELS).max(1);
        let label_y = params.padding + params.chart_height + 18.0;

        for point in points.iter().step_by(stride) {
            context.fill_text(&point.label, point.x - 30.0, label_y)?;
        }

        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(NO_DATA_COLOR));
        context.set_font("16px Arial");
        let text = "No orders yet - waiting for first poll...";
        context.fill_text(text, 50.0, self.height as f64 / 2.0)?;

        Ok(())
    }

    /// Update canvas dimensions
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
