//! Best-effort detection of AR glasses, webcams, and GPUs
//!
//! Hardware state only tunes configuration and user messaging; nothing here
//! is allowed to fail the run. Each probe swallows command failures and
//! leaves the corresponding fields at their defaults.

use serde::Serialize;

use crate::runner::Runner;

/// Snapshot of detected AR/VR-relevant hardware
#[derive(Debug, Clone, Default, Serialize)]
pub struct HardwareInfo {
    pub glasses_detected: bool,
    pub glasses_name: String,
    pub glasses_vendor_id: String,
    pub glasses_product_id: String,
    pub webcam_detected: bool,
    pub webcam_name: String,
    pub webcam_path: String,
    pub gpu_vendor: String,
    pub gpu_name: String,
}

/// USB VID:PID pairs of supported AR glasses
const KNOWN_GLASSES: &[(&str, &str, &str)] = &[
    ("3318", "0424", "XREAL Air"),
    ("3318", "0428", "XREAL Air 2"),
    ("3318", "0432", "XREAL Air 2 Pro"),
    ("3318", "0436", "XREAL Air 2 Ultra"),
    ("04d2", "1a60", "Rokid Max"),
    ("35ca", "0102", "Viture One"),
];

/// Probe connected hardware through the runner
pub fn detect_hardware(runner: &dyn Runner) -> HardwareInfo {
    let mut info = HardwareInfo::default();
    detect_glasses(runner, &mut info);
    detect_webcam(runner, &mut info);
    detect_gpu(runner, &mut info);
    info
}

fn detect_glasses(runner: &dyn Runner, info: &mut HardwareInfo) {
    let Ok(output) = runner.run_unchecked("lsusb") else {
        return;
    };
    if !output.success() {
        return;
    }
    for line in output.stdout.lines() {
        let line = line.to_lowercase();
        for (vid, pid, name) in KNOWN_GLASSES {
            if line.contains(&format!("{vid}:{pid}")) {
                info.glasses_detected = true;
                info.glasses_name = (*name).to_string();
                info.glasses_vendor_id = (*vid).to_string();
                info.glasses_product_id = (*pid).to_string();
                return;
            }
        }
    }
}

fn detect_webcam(runner: &dyn Runner, info: &mut HardwareInfo) {
    for i in 0..10 {
        let dev = format!("/dev/video{i}");
        if !std::path::Path::new(&dev).exists() {
            continue;
        }
        let Ok(output) = runner.run_unchecked(&format!("v4l2-ctl -d {dev} --info")) else {
            continue;
        };
        if !output.success() || !output.stdout.contains("Camera") {
            continue;
        }
        info.webcam_detected = true;
        info.webcam_path = dev;
        if let Some(line) = output.stdout.lines().find(|l| l.contains("Card type")) {
            if let Some(name) = line.rsplit(':').next() {
                info.webcam_name = name.trim().to_string();
            }
        }
        return;
    }
}

fn detect_gpu(runner: &dyn Runner, info: &mut HardwareInfo) {
    let Ok(output) = runner.run_unchecked("lspci") else {
        return;
    };
    if !output.success() {
        return;
    }
    for line in output.stdout.lines() {
        if !line.contains("VGA") && !line.contains("3D") {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.contains("nvidia") {
            info.gpu_vendor = "nvidia".to_string();
        } else if lower.contains("amd") || lower.contains("radeon") {
            info.gpu_vendor = "amd".to_string();
        } else if lower.contains("intel") {
            info.gpu_vendor = "intel".to_string();
        }
        if let Some(name) = line.rsplit(':').next() {
            info.gpu_name = name.trim().to_string();
        }
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::MockRunner;

    #[test]
    fn test_detect_xreal_glasses() {
        let runner = MockRunner::new().on(
            "lsusb",
            0,
            "Bus 003 Device 014: ID 3318:0428 MRG XREAL Air 2\n",
        );
        let info = detect_hardware(&runner);
        assert!(info.glasses_detected);
        assert_eq!(info.glasses_name, "XREAL Air 2");
        assert_eq!(info.glasses_vendor_id, "3318");
        assert_eq!(info.glasses_product_id, "0428");
    }

    #[test]
    fn test_no_glasses_detected() {
        let runner = MockRunner::new().on("lsusb", 0, "Bus 001 Device 001: ID 1d6b:0002 hub\n");
        let info = detect_hardware(&runner);
        assert!(!info.glasses_detected);
        assert!(info.glasses_name.is_empty());
    }

    #[test]
    fn test_probe_failure_yields_defaults() {
        let runner = MockRunner::new().failing_on("lsusb").failing_on("lspci");
        let info = detect_hardware(&runner);
        assert!(!info.glasses_detected);
        assert!(info.gpu_vendor.is_empty());
    }

    #[test]
    fn test_detect_nvidia_gpu() {
        let runner = MockRunner::new().on(
            "lspci",
            0,
            "01:00.0 VGA compatible controller: NVIDIA Corporation AD104 [GeForce RTX 4070]\n",
        );
        let info = detect_hardware(&runner);
        assert_eq!(info.gpu_vendor, "nvidia");
        assert!(info.gpu_name.contains("RTX 4070"));
    }
}
