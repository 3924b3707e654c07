use super::{escape_html, page};

const LOGIN_STYLE: &str = r#"
    body { display: flex; align-items: center; justify-content: center; min-height: 100vh; }
    .card { width: 100%; max-width: 360px; text-align: center; }
    input { width: 100%; margin-bottom: 1rem; }
    button { width: 100%; }
"#;

const LOGIN_SCRIPT: &str = r#"
<script>
  const form = document.getElementById('login-form');
  const error = document.getElementById('error');
  form.addEventListener('submit', async (event) => {
    event.preventDefault();
    error.textContent = '';
    const password = document.getElementById('password').value;
    try {
      const res = await fetch('/verify-password', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ password }),
      });
      const data = await res.json();
      if (data.success) {
        window.location.href = '/domains?token=' + encodeURIComponent(data.token);
      } else {
        error.textContent = data.message || 'Wrong password';
      }
    } catch (e) {
      error.textContent = 'Unable to reach the server';
    }
  });
</script>
"#;

pub fn render_login_page(site_name: &str) -> String {
    let mut body = String::from("<body>\n<div class=\"card\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(site_name)));
    body.push_str(
        r#"<form id="login-form">
  <input type="password" id="password" placeholder="Password" autocomplete="current-password" required>
  <button type="submit">Log in</button>
  <div class="error" id="error"></div>
</form>
</div>
"#,
    );
    body.push_str(LOGIN_SCRIPT);
    body.push_str("</body>");

    page(site_name, LOGIN_STYLE, &body)
}
