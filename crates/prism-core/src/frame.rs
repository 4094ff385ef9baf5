use ndarray::Array2;

use crate::consts::CHANNEL_COUNT;

/// A single-channel image.
/// Pixel values are f32, nominally in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    /// Build a color frame from three equally sized channel arrays.
    pub fn from_channels(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> Self {
        Self {
            red: Frame::new(red),
            green: Frame::new(green),
            blue: Frame::new(blue),
        }
    }

    /// Replicate one frame into all three channels.
    pub fn from_mono(frame: &Frame) -> Self {
        Self {
            red: frame.clone(),
            green: frame.clone(),
            blue: frame.clone(),
        }
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// Channel by index: 0 = red, 1 = green, 2 = blue.
    pub fn channel(&self, index: usize) -> &Frame {
        match index {
            0 => &self.red,
            1 => &self.green,
            _ => &self.blue,
        }
    }

    pub fn channels(&self) -> [&Frame; CHANNEL_COUNT] {
        [&self.red, &self.green, &self.blue]
    }
}

/// Something the spectrum loader can sample per channel at normalized
/// coordinates `u, v` in [0, 1] (u across columns, v down rows).
pub trait ImageSource: Sync {
    fn sample(&self, u: f64, v: f64) -> [f32; CHANNEL_COUNT];
}

impl ImageSource for ColorFrame {
    fn sample(&self, u: f64, v: f64) -> [f32; CHANNEL_COUNT] {
        [
            sample_normalized(&self.red.data, u, v),
            sample_normalized(&self.green.data, u, v),
            sample_normalized(&self.blue.data, u, v),
        ]
    }
}

impl ImageSource for Frame {
    fn sample(&self, u: f64, v: f64) -> [f32; CHANNEL_COUNT] {
        let value = sample_normalized(&self.data, u, v);
        [value; CHANNEL_COUNT]
    }
}

/// Sample at a normalized coordinate. Pixel centers sit at `(i + 0.5) / size`,
/// so an image sampled on its own grid returns its pixels unchanged.
fn sample_normalized(data: &Array2<f32>, u: f64, v: f64) -> f32 {
    let (h, w) = data.dim();
    let x = u * w as f64 - 0.5;
    let y = v * h as f64 - 0.5;
    bilinear_sample_clamped(data, y, x)
}

/// Bilinear interpolation with edge clamping. An empty array samples as 0.0.
pub fn bilinear_sample_clamped(data: &Array2<f32>, y: f64, x: f64) -> f32 {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return 0.0;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let sample = |r: i64, c: i64| -> f32 {
        let r = r.clamp(0, h as i64 - 1) as usize;
        let c = c.clamp(0, w as i64 - 1) as usize;
        data[[r, c]]
    };

    let v00 = sample(y0, x0);
    let v10 = sample(y0, x1);
    let v01 = sample(y1, x0);
    let v11 = sample(y1, x1);

    v00 * (1.0 - fx) * (1.0 - fy) + v10 * fx * (1.0 - fy) + v01 * (1.0 - fx) * fy + v11 * fx * fy
}
