//! Page shell served at `/` by the preview server.

/// Single-file page that lists every region and swaps in updates from `/ws`.
pub const PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Holmes Admin Preview</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            background: #f5f5f5;
            color: #333;
        }

        .header {
            background: #2c3e50;
            color: #fff;
            padding: 12px 20px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }

        .status { font-size: 13px; color: #bbb; }
        .status.connected { color: #2ecc71; }

        main { padding: 20px; display: grid; gap: 20px; }

        section.region {
            background: #fff;
            border: 1px solid #ddd;
            border-radius: 4px;
            padding: 12px 16px;
        }

        section.region > .region-name {
            font-size: 12px;
            color: #888;
            margin-bottom: 8px;
        }

        .region table { border-collapse: collapse; width: 100%; }
        .region th, .region td { text-align: left; padding: 4px 8px; border-bottom: 1px solid #eee; }
        .region .modal.hide { display: none; }
        .empty { color: #888; font-style: italic; }
    </style>
</head>
<body>
    <div class="header">
        <strong>Holmes Admin Preview</strong>
        <span id="status" class="status">connecting...</span>
    </div>
    <main id="regions"><p class="empty">No view rendered yet.</p></main>
    <script>
        const revisions = {};

        function regionElement(name) {
            let el = document.getElementById('region-' + name);
            if (!el) {
                const main = document.getElementById('regions');
                const empty = main.querySelector('.empty');
                if (empty) empty.remove();
                el = document.createElement('section');
                el.className = 'region';
                el.id = 'region-' + name;
                const label = document.createElement('div');
                label.className = 'region-name';
                label.textContent = name;
                const body = document.createElement('div');
                body.className = 'region-body';
                el.appendChild(label);
                el.appendChild(body);
                main.appendChild(el);
            }
            return el;
        }

        function apply(snapshot) {
            const el = regionElement(snapshot.region);
            el.querySelector('.region-body').innerHTML = snapshot.html;
            revisions[snapshot.region] = snapshot.revision;
        }

        async function loadAll() {
            const response = await fetch('/regions');
            const snapshots = await response.json();
            snapshots.forEach(apply);
        }

        function connect() {
            const status = document.getElementById('status');
            const ws = new WebSocket('ws://' + location.host + '/ws');
            ws.onopen = () => {
                status.textContent = 'live';
                status.classList.add('connected');
                loadAll();
            };
            ws.onmessage = (event) => {
                const snapshot = JSON.parse(event.data);
                const known = revisions[snapshot.region] || 0;
                if (snapshot.revision > known + 1) {
                    loadAll();
                } else if (snapshot.revision > known) {
                    apply(snapshot);
                }
            };
            ws.onclose = () => {
                status.textContent = 'disconnected, retrying...';
                status.classList.remove('connected');
                setTimeout(connect, 2000);
            };
        }

        connect();
    </script>
</body>
</html>
"#;
