//! The polling dashboard page.
//!
//! Presentation glue only: the page talks to the core exclusively through
//! `GET /api/stats`, which it polls every 1.5 seconds to re-render the
//! counters and a newest-first view of the event log.

use axum::response::Html;

/// The dashboard markup, served as a single static page.
const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nexus Control Plane</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 960px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        .status { color: #3fb950; font-weight: bold; }
        .metric {
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 160px;
        }
        .metric .label { color: #8b949e; font-size: 0.85rem; }
        .metric .value { color: #58a6ff; font-size: 1.5rem; font-weight: bold; }
        .metric .value.green { color: #3fb950; }
        .terminal {
            background: #010409;
            border: 1px solid #30363d;
            border-radius: 6px;
            margin-top: 1.5rem;
            padding: 1rem;
            height: 360px;
            overflow-y: auto;
            font-size: 0.85rem;
        }
        .log-entry { padding: 0.15rem 0; }
        .log-time { color: #8b949e; margin-right: 0.75rem; }
    </style>
</head>
<body>
    <h1>Nexus Control Plane</h1>
    <p class="subtitle">Workflow orchestrator -- demo dashboard</p>

    <p>Status: <span class="status">ONLINE</span></p>

    <div>
        <div class="metric">
            <div class="label">Total API Calls</div>
            <div class="value" id="calls">0</div>
        </div>
        <div class="metric">
            <div class="label">Est. Tokens Saved</div>
            <div class="value green" id="tokens">0</div>
        </div>
        <div class="metric">
            <div class="label">Active Workflows</div>
            <div class="value" id="agents">0</div>
        </div>
    </div>

    <div class="terminal" id="terminal">
        <div class="log-entry">-- BACKEND LOG STREAM --</div>
    </div>

    <script>
        function updateDashboard() {
            fetch('/api/stats')
                .then((response) => response.json())
                .then((data) => {
                    document.getElementById('calls').innerText = data.total_calls;
                    document.getElementById('tokens').innerText = data.tokens_saved;
                    document.getElementById('agents').innerText = data.active_agents;

                    const term = document.getElementById('terminal');
                    term.innerHTML = '<div class="log-entry">-- BACKEND LOG STREAM --</div>';

                    // Newest entries first.
                    data.logs.slice().reverse().forEach((log) => {
                        const line = document.createElement('div');
                        line.className = 'log-entry';
                        const time = document.createElement('span');
                        time.className = 'log-time';
                        time.textContent = '[' + log.time + ']';
                        line.appendChild(time);
                        line.appendChild(document.createTextNode(log.msg));
                        term.appendChild(line);
                    });
                });
        }

        setInterval(updateDashboard, 1500);
        updateDashboard();
    </script>
</body>
</html>"##;

/// Serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
