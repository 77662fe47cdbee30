//! Static interactive tool page
//!
//! Single inline HTML page; each tool panel posts to its endpoint and
//! renders the envelope. The timestamp tool is purely client-side.

/// Index HTML template
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>DevTerm Web - Developer Tools</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0d1117; color: #e6edf3; min-height: 100vh; }
        .container { max-width: 1200px; margin: 0 auto; padding: 20px; }
        h1 { color: #58a6ff; margin-bottom: 30px; font-size: 2rem; }
        .tools-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; margin-bottom: 40px; }
        .tool-card { background: #161b22; border: 1px solid #30363d; border-radius: 6px; padding: 20px; cursor: pointer; transition: all 0.2s; }
        .tool-card:hover { border-color: #58a6ff; transform: translateY(-2px); }
        .tool-card h3 { color: #58a6ff; margin-bottom: 8px; }
        .tool-card p { color: #8b949e; font-size: 0.9rem; }
        .tool-section { display: none; margin-top: 30px; }
        .tool-section.active { display: block; }
        .tool-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
        .tool-header h2 { color: #58a6ff; }
        .back-btn { background: #21262d; color: #e6edf3; border: 1px solid #30363d; padding: 8px 16px; border-radius: 6px; cursor: pointer; }
        .back-btn:hover { background: #30363d; }
        textarea, input, select { width: 100%; background: #0d1117; border: 1px solid #30363d; color: #e6edf3; padding: 12px; border-radius: 6px; font-family: monospace; font-size: 14px; margin-bottom: 16px; }
        textarea:focus, input:focus, select:focus { outline: none; border-color: #58a6ff; }
        textarea { min-height: 150px; resize: vertical; }
        .btn { background: #238636; color: white; border: none; padding: 12px 24px; border-radius: 6px; cursor: pointer; font-size: 14px; font-weight: 600; }
        .btn:hover { background: #2ea043; }
        .btn-secondary { background: #21262d; }
        .btn-secondary:hover { background: #30363d; }
        .output { background: #161b22; border: 1px solid #30363d; padding: 16px; border-radius: 6px; min-height: 100px; white-space: pre-wrap; font-family: monospace; overflow-x: auto; }
        .error { color: #f85149; }
        .success { color: #7ee787; }
        label { display: block; margin-bottom: 8px; color: #8b949e; }
    </style>
</head>
<body>
    <div class="container">
        <h1>DevTerm Web - Developer Tools</h1>

        <div id="tools-grid" class="tools-grid">
            <div class="tool-card" onclick="showTool('json-formatter')">
                <h3>&#128196; JSON Formatter</h3>
                <p>Format, validate, minify JSON</p>
            </div>
            <div class="tool-card" onclick="showTool('base64')">
                <h3>&#128272; Base64</h3>
                <p>Encode/decode Base64</p>
            </div>
            <div class="tool-card" onclick="showTool('url')">
                <h3>&#128279; URL Encode</h3>
                <p>URL encode/decode</p>
            </div>
            <div class="tool-card" onclick="showTool('hash')">
                <h3>&#128274; Hash Generator</h3>
                <p>MD5, SHA-256, SHA-512</p>
            </div>
            <div class="tool-card" onclick="showTool('uuid')">
                <h3>&#127380; UUID Generator</h3>
                <p>Generate UUIDs</p>
            </div>
            <div class="tool-card" onclick="showTool('password')">
                <h3>&#128273; Password</h3>
                <p>Generate secure passwords</p>
            </div>
            <div class="tool-card" onclick="showTool('qrcode')">
                <h3>&#128241; QR Code</h3>
                <p>Generate QR codes</p>
            </div>
            <div class="tool-card" onclick="showTool('http')">
                <h3>&#127760; HTTP Client</h3>
                <p>Make HTTP requests</p>
            </div>
            <div class="tool-card" onclick="showTool('case')">
                <h3>Aa Case Converter</h3>
                <p>Convert text case</p>
            </div>
            <div class="tool-card" onclick="showTool('timestamp')">
                <h3>&#9200; Timestamp</h3>
                <p>Unix timestamp converter</p>
            </div>
        </div>

        <div id="json-formatter" class="tool-section">
            <div class="tool-header">
                <h2>JSON Formatter</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <textarea id="json-input" placeholder="Paste your JSON here..."></textarea>
            <div>
                <button class="btn" onclick="formatJson('format')">Format</button>
                <button class="btn btn-secondary" onclick="formatJson('minify')">Minify</button>
            </div>
            <div id="json-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="base64" class="tool-section">
            <div class="tool-header">
                <h2>Base64 Encoder/Decoder</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <textarea id="base64-input" placeholder="Enter text..."></textarea>
            <div>
                <button class="btn" onclick="base64Run('encode')">Encode</button>
                <button class="btn btn-secondary" onclick="base64Run('decode')">Decode</button>
            </div>
            <div id="base64-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="url" class="tool-section">
            <div class="tool-header">
                <h2>URL Encoder/Decoder</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <textarea id="url-input" placeholder="Enter text..."></textarea>
            <div>
                <button class="btn" onclick="urlRun('encode')">Encode</button>
                <button class="btn btn-secondary" onclick="urlRun('decode')">Decode</button>
            </div>
            <div id="url-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="hash" class="tool-section">
            <div class="tool-header">
                <h2>Hash Generator</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <textarea id="hash-input" placeholder="Enter text to hash..."></textarea>
            <button class="btn" onclick="generateHash()">Generate Hashes</button>
            <div id="hash-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="uuid" class="tool-section">
            <div class="tool-header">
                <h2>UUID Generator</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <button class="btn" onclick="generateUuid()">Generate UUID</button>
            <div id="uuid-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="password" class="tool-section">
            <div class="tool-header">
                <h2>Password Generator</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <label>Length: <input type="number" id="pw-length" value="16" min="4" max="128"></label>
            <label><input type="checkbox" id="pw-upper" checked> Uppercase (A-Z)</label>
            <label><input type="checkbox" id="pw-lower" checked> Lowercase (a-z)</label>
            <label><input type="checkbox" id="pw-digits" checked> Digits (0-9)</label>
            <label><input type="checkbox" id="pw-special" checked> Special (!@#$...)</label>
            <button class="btn" onclick="generatePassword()">Generate</button>
            <div id="password-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="qrcode" class="tool-section">
            <div class="tool-header">
                <h2>QR Code Generator</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <textarea id="qr-input" placeholder="Enter text or URL..."></textarea>
            <button class="btn" onclick="generateQr()">Generate QR Code</button>
            <div id="qr-output" style="margin-top: 16px;"></div>
        </div>

        <div id="http" class="tool-section">
            <div class="tool-header">
                <h2>HTTP Client</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <input type="text" id="http-url" placeholder="https://api.example.com">
            <select id="http-method">
                <option value="GET">GET</option>
                <option value="POST">POST</option>
                <option value="PUT">PUT</option>
                <option value="DELETE">DELETE</option>
            </select>
            <textarea id="http-body" placeholder="Request body (optional)"></textarea>
            <button class="btn" onclick="makeRequest()">Send Request</button>
            <div id="http-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="case" class="tool-section">
            <div class="tool-header">
                <h2>Case Converter</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <textarea id="case-input" placeholder="Enter text..."></textarea>
            <select id="case-type">
                <option value="upper">UPPERCASE</option>
                <option value="lower">lowercase</option>
                <option value="title">Title Case</option>
                <option value="camel">camelCase</option>
                <option value="snake">snake_case</option>
                <option value="kebab">kebab-case</option>
            </select>
            <button class="btn" onclick="convertCase()">Convert</button>
            <div id="case-output" class="output" style="margin-top: 16px;"></div>
        </div>

        <div id="timestamp" class="tool-section">
            <div class="tool-header">
                <h2>Timestamp Converter</h2>
                <button class="back-btn" onclick="showTool('')">&larr; Back</button>
            </div>
            <button class="btn" onclick="showTimestamp()">Show Current Time</button>
            <div id="timestamp-output" class="output" style="margin-top: 16px;"></div>
        </div>
    </div>

    <script>
        function showTool(tool) {
            document.querySelectorAll('.tool-section').forEach(el => el.classList.remove('active'));
            document.getElementById('tools-grid').style.display = tool ? 'none' : 'grid';
            if (tool) document.getElementById(tool).classList.add('active');
        }

        async function callApi(path, payload) {
            const response = await fetch(path, {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify(payload)
            });
            return response.json();
        }

        function renderText(id, result) {
            const el = document.getElementById(id);
            el.textContent = result.success ? result.output : result.error;
            el.className = 'output ' + (result.success ? 'success' : 'error');
        }

        async function formatJson(mode) {
            const input = document.getElementById('json-input').value;
            renderText('json-output', await callApi('/api/json/format', {data: input, mode: mode}));
        }

        async function base64Run(op) {
            const input = document.getElementById('base64-input').value;
            renderText('base64-output', await callApi('/api/base64/' + op, {data: input}));
        }

        async function urlRun(op) {
            const input = document.getElementById('url-input').value;
            renderText('url-output', await callApi('/api/url/' + op, {data: input}));
        }

        async function generateHash() {
            const input = document.getElementById('hash-input').value;
            renderText('hash-output', await callApi('/api/hash', {data: input}));
        }

        async function generateUuid() {
            renderText('uuid-output', await callApi('/api/uuid', {}));
        }

        async function generatePassword() {
            const payload = {
                length: document.getElementById('pw-length').value,
                uppercase: document.getElementById('pw-upper').checked,
                lowercase: document.getElementById('pw-lower').checked,
                digits: document.getElementById('pw-digits').checked,
                special: document.getElementById('pw-special').checked
            };
            renderText('password-output', await callApi('/api/password', payload));
        }

        async function generateQr() {
            const input = document.getElementById('qr-input').value;
            const result = await callApi('/api/qrcode', {data: input});
            if (result.success) {
                document.getElementById('qr-output').innerHTML = '<img src="' + result.image + '" alt="QR Code">';
            } else {
                document.getElementById('qr-output').textContent = result.error;
            }
        }

        async function makeRequest() {
            const payload = {
                url: document.getElementById('http-url').value,
                method: document.getElementById('http-method').value,
                body: document.getElementById('http-body').value
            };
            renderText('http-output', await callApi('/api/http', payload));
        }

        async function convertCase() {
            const payload = {
                data: document.getElementById('case-input').value,
                type: document.getElementById('case-type').value
            };
            renderText('case-output', await callApi('/api/case', payload));
        }

        function showTimestamp() {
            const now = new Date();
            document.getElementById('timestamp-output').innerHTML =
                'Unix: ' + Math.floor(now.getTime() / 1000) + '<br>' +
                'ISO: ' + now.toISOString() + '<br>' +
                'Local: ' + now.toString();
        }
    </script>
</body>
</html>
"#;
