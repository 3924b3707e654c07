use super::{escape_html, page};
use renewal_keeper_domain::{DomainRecord, Priority};

const DASHBOARD_STYLE: &str = r#"
    .container { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
    .toolbar { display: flex; gap: 0.75rem; align-items: center; justify-content: space-between; margin-bottom: 1rem; flex-wrap: wrap; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: 0.6rem 0.5rem; border-bottom: 1px solid #e4e7eb; font-size: 0.9rem; }
    th[data-sort] { cursor: pointer; user-select: none; }
    .dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; }
    .dot.ok { background: #27ab83; }
    .dot.expired { background: #e12d39; }
    .dot.unknown { background: #9aa5b1; }
    .tag { padding: 0.15rem 0.5rem; border-radius: 4px; font-size: 0.75rem; color: #fff; }
    .tag.high { background: #e12d39; }
    .tag.medium { background: #f0b429; }
    .tag.low { background: #3366ff; }
    .progress { width: 120px; height: 8px; background: #e4e7eb; border-radius: 4px; overflow: hidden; }
    .progress > div { height: 100%; background: #3366ff; }
    .progress.expired > div { background: #e12d39; }
    .actions { display: flex; gap: 0.4rem; }
    .actions button { padding: 0.3rem 0.6rem; font-size: 0.8rem; }
    form.domain-form { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 0.75rem; margin-top: 1.5rem; }
    .empty { text-align: center; color: #7b8794; padding: 2rem; }
"#;

const DASHBOARD_SCRIPT: &str = r#"
<script>
  const token = document.body.dataset.token;
  const form = document.getElementById('domain-form');
  const error = document.getElementById('error');

  async function post(path, body) {
    const res = await fetch(path, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json', 'renewal-keeper-token': token },
      body: JSON.stringify(body),
    });
    if (res.status === 401) {
      window.location.href = '/';
      return false;
    }
    const text = await res.text();
    if (!res.ok) {
      let message = text;
      try { message = JSON.parse(text).message || text; } catch (e) {}
      error.textContent = message;
      return false;
    }
    return true;
  }

  function formValues() {
    const values = {};
    new FormData(form).forEach((value, key) => { values[key] = value; });
    return values;
  }

  function resetForm() {
    form.reset();
    form.originalDomain.value = '';
    document.getElementById('submit').textContent = 'Add';
    document.getElementById('cancel').hidden = true;
  }

  form.addEventListener('submit', async (event) => {
    event.preventDefault();
    error.textContent = '';
    const values = formValues();
    const originalDomain = values.originalDomain;
    delete values.originalDomain;
    const ok = originalDomain
      ? await post('/edit-domain', Object.assign(values, { originalDomain }))
      : await post('/add-domain', values);
    if (ok) window.location.reload();
  });

  document.getElementById('cancel').addEventListener('click', resetForm);

  document.querySelectorAll('button.edit').forEach((button) => {
    button.addEventListener('click', () => {
      const row = button.closest('tr').dataset;
      form.domain.value = row.domain;
      form.registrationDate.value = row.registrationDate;
      form.expirationDate.value = row.expirationDate;
      form.system.value = row.system;
      form.systemURL.value = row.systemUrl;
      form.priority.value = row.priority;
      form.originalDomain.value = row.domain;
      document.getElementById('submit').textContent = 'Save';
      document.getElementById('cancel').hidden = false;
      form.scrollIntoView({ behavior: 'smooth' });
    });
  });

  document.querySelectorAll('button.delete').forEach((button) => {
    button.addEventListener('click', async () => {
      const domain = button.closest('tr').dataset.domain;
      if (!confirm('Delete ' + domain + '?')) return;
      if (await post('/delete-domain', { domain })) window.location.reload();
    });
  });

  document.getElementById('priority-filter').addEventListener('change', (event) => {
    const wanted = event.target.value;
    document.querySelectorAll('tbody tr[data-domain]').forEach((row) => {
      row.hidden = wanted !== 'all' && row.dataset.priority !== wanted;
    });
  });

  let sortState = { key: null, ascending: true };
  document.querySelectorAll('th[data-sort]').forEach((th) => {
    th.addEventListener('click', () => {
      const key = th.dataset.sort;
      sortState = { key, ascending: sortState.key === key ? !sortState.ascending : true };
      const tbody = document.querySelector('tbody');
      const rows = Array.from(tbody.querySelectorAll('tr[data-domain]'));
      rows.sort((a, b) => {
        let left = a.dataset[key];
        let right = b.dataset[key];
        if (key === 'daysRemaining') {
          left = left === '' ? Infinity : Number(left);
          right = right === '' ? Infinity : Number(right);
        }
        const order = left < right ? -1 : left > right ? 1 : 0;
        return sortState.ascending ? order : -order;
      });
      rows.forEach((row) => tbody.appendChild(row));
    });
  });
</script>
"#;

fn render_row(record: &DomainRecord, now: i64) -> String {
    let lifetime = record.lifetime(now).ok();
    let (status, days_cell, days_sort, progress) = match &lifetime {
        Some(lifetime) if lifetime.expired => (
            "expired",
            "Expired".to_string(),
            lifetime.days_remaining.to_string(),
            lifetime.progress_percentage,
        ),
        Some(lifetime) => (
            "ok",
            format!("{} days", lifetime.days_remaining),
            lifetime.days_remaining.to_string(),
            lifetime.progress_percentage,
        ),
        None => ("unknown", "Invalid date".to_string(), String::new(), 0.0),
    };

    let registrar = if record.system_url.is_empty() {
        escape_html(&record.system)
    } else {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&record.system_url),
            escape_html(&record.system)
        )
    };

    let mut row = format!(
        "<tr data-domain=\"{}\" data-registration-date=\"{}\" data-expiration-date=\"{}\" data-system=\"{}\" data-system-url=\"{}\" data-priority=\"{}\" data-days-remaining=\"{}\">\n",
        escape_html(&record.domain),
        escape_html(&record.registration_date),
        escape_html(&record.expiration_date),
        escape_html(&record.system),
        escape_html(&record.system_url),
        record.priority.as_str(),
        days_sort,
    );
    row.push_str(&format!(
        "  <td><span class=\"dot {}\" title=\"{}\"></span></td>\n",
        status, status
    ));
    row.push_str(&format!("  <td>{}</td>\n", escape_html(&record.domain)));
    row.push_str(&format!(
        "  <td><span class=\"tag {}\">{}</span></td>\n",
        record.priority.as_str(),
        record.priority.label()
    ));
    row.push_str(&format!("  <td>{}</td>\n", registrar));
    row.push_str(&format!(
        "  <td>{}</td>\n  <td>{}</td>\n",
        escape_html(&record.registration_date),
        escape_html(&record.expiration_date)
    ));
    row.push_str(&format!("  <td>{}</td>\n", days_cell));
    row.push_str(&format!(
        "  <td><div class=\"progress {}\" title=\"{:.1}%\"><div style=\"width: {:.1}%\"></div></div></td>\n",
        status, progress, progress
    ));
    row.push_str(
        "  <td class=\"actions\"><button class=\"secondary edit\">Edit</button><button class=\"danger delete\">Delete</button></td>\n</tr>\n",
    );
    row
}

fn priority_options() -> String {
    [Priority::High, Priority::Medium, Priority::Low]
        .iter()
        .map(|priority| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                priority.as_str(),
                if *priority == Priority::default() {
                    " selected"
                } else {
                    ""
                },
                priority.label()
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// The dashboard listing every record, in stored order, as of `now`
pub fn render_dashboard(
    site_name: &str,
    token: &str,
    records: &[DomainRecord],
    now: i64,
) -> String {
    let mut body = format!("<body data-token=\"{}\">\n", escape_html(token));
    body.push_str("<div class=\"container\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(site_name)));
    body.push_str("<div class=\"card\">\n<div class=\"toolbar\">\n");
    body.push_str(&format!("<span>{} tracked</span>\n", records.len()));
    body.push_str(
        "<select id=\"priority-filter\"><option value=\"all\">All priorities</option><option value=\"high\">Domain</option><option value=\"medium\">VPS</option><option value=\"low\">Other</option></select>\n",
    );
    body.push_str("</div>\n<table>\n<thead>\n<tr>");
    body.push_str("<th>Status</th><th data-sort=\"domain\">Domain</th><th data-sort=\"priority\">Type</th><th data-sort=\"system\">Registrar</th>");
    body.push_str("<th data-sort=\"registrationDate\">Registered</th><th data-sort=\"expirationDate\">Expires</th><th data-sort=\"daysRemaining\">Remaining</th><th>Progress</th><th></th>");
    body.push_str("</tr>\n</thead>\n<tbody>\n");
    if records.is_empty() {
        body.push_str("<tr><td colspan=\"9\" class=\"empty\">No domains yet</td></tr>\n");
    }
    for record in records {
        body.push_str(&render_row(record, now));
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str("<form id=\"domain-form\" class=\"domain-form\">\n");
    body.push_str("  <input type=\"hidden\" name=\"originalDomain\">\n");
    body.push_str("  <input name=\"domain\" placeholder=\"Domain\" required>\n");
    body.push_str("  <input name=\"registrationDate\" type=\"date\" title=\"Registration date\">\n");
    body.push_str("  <input name=\"expirationDate\" type=\"date\" title=\"Expiration date\" required>\n");
    body.push_str("  <input name=\"system\" placeholder=\"Registrar\">\n");
    body.push_str("  <input name=\"systemURL\" type=\"url\" placeholder=\"Registrar URL\">\n");
    body.push_str(&format!(
        "  <select name=\"priority\">{}</select>\n",
        priority_options()
    ));
    body.push_str("  <button type=\"submit\" id=\"submit\">Add</button>\n");
    body.push_str("  <button type=\"button\" id=\"cancel\" class=\"secondary\" hidden>Cancel</button>\n");
    body.push_str("</form>\n<div class=\"error\" id=\"error\"></div>\n");
    body.push_str("</div>\n</div>\n");
    body.push_str(DASHBOARD_SCRIPT);
    body.push_str("</body>");

    page(site_name, DASHBOARD_STYLE, &body)
}
