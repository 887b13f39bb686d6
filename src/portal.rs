//! Embedded portal page.
//!
//! The page is baked into the binary; `{{MODE}}` and `{{SSID}}` are
//! substituted at render time. It polls `/angle` and posts `/recalibrate`
//! against the same origin the DNS catch-all steered the client to.

const PORTAL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{SSID}} Tilt Gauge</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background: #1a1a2e;
            color: #eee;
            min-height: 100vh;
            padding: 20px;
        }
        .container {
            max-width: 400px;
            margin: 0 auto;
            text-align: center;
        }
        h1 {
            margin-bottom: 8px;
            font-size: 24px;
            color: #00d4ff;
        }
        .mode {
            font-size: 14px;
            color: #aaa;
            margin-bottom: 32px;
        }
        #angle {
            font-size: 64px;
            font-variant-numeric: tabular-nums;
            margin-bottom: 32px;
        }
        button {
            padding: 14px 28px;
            border: none;
            border-radius: 8px;
            font-size: 16px;
            background: #00d4ff;
            color: #1a1a2e;
            cursor: pointer;
        }
        #status {
            margin-top: 12px;
            font-size: 14px;
            color: #aaa;
            min-height: 1em;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{SSID}}</h1>
        <div class="mode">{{MODE}} mode</div>
        <div id="angle">--.--</div>
        <button onclick="recalibrate()">Recalibrate</button>
        <div id="status"></div>
    </div>
    <script>
        async function poll() {
            try {
                const res = await fetch('/angle');
                document.getElementById('angle').textContent = await res.text();
            } catch (e) { /* keep last reading */ }
        }
        async function recalibrate() {
            const status = document.getElementById('status');
            status.textContent = 'Calibrating, keep the device still...';
            try {
                const res = await fetch('/recalibrate', { method: 'POST' });
                status.textContent = (await res.text()) === 'OK' ? 'Calibrated' : 'Calibration failed';
            } catch (e) {
                status.textContent = 'Calibration failed';
            }
        }
        setInterval(poll, 500);
        poll();
    </script>
</body>
</html>
"#;

/// Renders the portal page for the configured mode and SSID.
pub fn render(mode: &str, ssid: &str) -> String {
    PORTAL_PAGE.replace("{{MODE}}", mode).replace("{{SSID}}", ssid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_placeholders() {
        let page = render("PITCH", "TiltPortal");

        assert!(page.contains("PITCH mode"));
        assert!(page.contains("<h1>TiltPortal</h1>"));
        assert!(!page.contains("{{MODE}}"));
        assert!(!page.contains("{{SSID}}"));
    }
}
