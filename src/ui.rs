use crate::models::Snapshot;
use crate::share::ShareLinks;

pub fn render_index(snapshot: &Snapshot, links: &ShareLinks) -> String {
    let buttons = snapshot
        .counts
        .iter()
        .map(|entry| {
            PHRASE_BUTTON
                .replace("{{SHORTCUT}}", &entry.shortcut.to_string())
                .replace("{{SLUG}}", &entry.slug)
                .replace("{{TEXT}}", &escape_html(&entry.phrase))
                .replace("{{COUNT}}", &entry.count.to_string())
        })
        .collect::<String>();

    INDEX_HTML
        .replace("{{BUTTONS}}", &buttons)
        .replace("{{TOTAL}}", &snapshot.total.to_string())
        .replace("{{PAGE_URL}}", &escape_html(&links.page))
        .replace("{{WHATSAPP_URL}}", &escape_html(&links.whatsapp))
        .replace("{{FACEBOOK_URL}}", &escape_html(&links.facebook))
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const PHRASE_BUTTON: &str = r#"
      <form method="post" action="/tap/{{SHORTCUT}}">
        <button class="tasbih-btn" type="submit" data-tasbih="{{SLUG}}" data-shortcut="{{SHORTCUT}}">
          <span class="tasbih-text">{{TEXT}}</span>
          <span class="tasbih-count">{{COUNT}}</span>
          <span class="tasbih-key">{{SHORTCUT}}</span>
        </button>
      </form>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>سبحة إلكترونية - صدقة جارية</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Amiri:wght@400;700&family=Cairo:wght@400;600&display=swap');

    :root {
      --bg-1: #f4f1ea;
      --bg-2: #d9e8dc;
      --ink: #23302a;
      --accent: #2d7a4b;
      --accent-2: #1f4e5f;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(31, 78, 95, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef5ef 60%, #f7f5f0 100%);
      color: var(--ink);
      font-family: "Cairo", "Tahoma", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      opacity: 0;
      transition: opacity 0.5s ease;
    }

    body.loaded {
      opacity: 1;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      text-align: center;
      display: grid;
      gap: 6px;
    }

    h1 {
      font-family: "Amiri", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6660;
    }

    .tasbih-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .tasbih-grid form {
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      cursor: pointer;
      font-family: inherit;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .tasbih-btn {
      width: 100%;
      background: white;
      border-radius: 20px;
      padding: 22px 18px;
      border: 1px solid rgba(31, 78, 95, 0.1);
      display: grid;
      gap: 10px;
      justify-items: center;
      position: relative;
    }

    .tasbih-btn.pulse {
      transform: scale(0.95);
    }

    .tasbih-text {
      font-family: "Amiri", "Georgia", serif;
      font-size: 1.6rem;
    }

    .tasbih-count {
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .tasbih-key {
      position: absolute;
      top: 10px;
      left: 14px;
      font-size: 0.8rem;
      color: #8a948f;
    }

    .total {
      text-align: center;
      font-size: 1.2rem;
    }

    .total span {
      font-size: 2.2rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .actions,
    .share {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 12px;
    }

    .btn {
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      color: white;
      background: var(--accent-2);
      text-decoration: none;
    }

    .btn-reset {
      background: #b5473a;
    }

    .btn-whatsapp {
      background: #25d366;
    }

    .btn-facebook {
      background: #1877f2;
    }

    .toast {
      position: fixed;
      top: 50%;
      left: 50%;
      transform: translate(-50%, -50%);
      color: white;
      padding: 18px 36px;
      border-radius: 10px;
      font-size: 1.15rem;
      z-index: 1000;
      box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
    }

    .toast.reset {
      background: #28a745;
    }

    .toast.copy {
      background: #007bff;
    }

    .status {
      text-align: center;
      font-size: 0.9rem;
      color: #8a948f;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .hint {
      margin: 0;
      text-align: center;
      color: #6f7a74;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>سبحة إلكترونية</h1>
      <p class="subtitle">صدقة جارية على روح المرحوم حازم محمد عقل</p>
    </header>

    <section class="tasbih-grid">{{BUTTONS}}
    </section>

    <p class="total">المجموع: <span id="total-count">{{TOTAL}}</span></p>

    <section class="actions">
      <form id="reset-form" method="post" action="/reset">
        <input type="hidden" name="confirm" value="yes" />
        <button class="btn btn-reset" type="submit">إعادة تعيين العدادات</button>
      </form>
    </section>

    <section class="share" id="share">
      <a class="btn btn-whatsapp" id="share-whatsapp" href="{{WHATSAPP_URL}}" target="_blank" rel="noopener">واتساب</a>
      <a class="btn btn-facebook" id="share-facebook" href="{{FACEBOOK_URL}}" target="_blank" rel="noopener">فيسبوك</a>
      <button class="btn" id="copy-link" type="button" data-url="{{PAGE_URL}}">نسخ الرابط</button>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">اضغط 1 إلى 4 للتسبيح من لوحة المفاتيح، و Ctrl+R لإعادة التعيين.</p>
  </main>

  <script>
    const totalEl = document.getElementById('total-count');
    const statusEl = document.getElementById('status');
    const buttons = Array.from(document.querySelectorAll('.tasbih-btn'));
    const resetForm = document.getElementById('reset-form');
    const copyBtn = document.getElementById('copy-link');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const render = (data) => {
      data.counts.forEach((entry) => {
        const button = buttons.find((btn) => btn.dataset.tasbih === entry.slug);
        if (button) {
          button.querySelector('.tasbih-count').textContent = entry.count;
        }
      });
      totalEl.textContent = data.total;
      setStatus(data.saved ? '' : 'تعذر الحفظ، العد مستمر في هذه الجلسة', data.saved ? '' : 'error');
    };

    const toast = (message, kind) => {
      const el = document.createElement('div');
      el.className = `toast ${kind}`;
      el.textContent = message;
      document.body.appendChild(el);
      setTimeout(() => el.remove(), 2000);
    };

    const pulse = (button) => {
      button.classList.add('pulse');
      setTimeout(() => button.classList.remove('pulse'), 150);
    };

    const tone = () => {
      try {
        const ctx = new (window.AudioContext || window.webkitAudioContext)();
        const osc = ctx.createOscillator();
        const gain = ctx.createGain();
        osc.connect(gain);
        gain.connect(ctx.destination);
        osc.frequency.setValueAtTime(800, ctx.currentTime);
        gain.gain.setValueAtTime(0.1, ctx.currentTime);
        gain.gain.exponentialRampToValueAtTime(0.01, ctx.currentTime + 0.1);
        osc.start(ctx.currentTime);
        osc.stop(ctx.currentTime + 0.1);
      } catch (err) {
        // no audio available
      }
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const increment = async (button) => {
      const data = await post('/api/increment', { phrase: button.dataset.tasbih });
      render(data);
      if (data.count !== null) {
        pulse(button);
        tone();
      }
    };

    const resetCounters = async () => {
      if (!confirm('هل أنت متأكد من إعادة تعيين جميع العدادات؟')) {
        return;
      }
      const data = await post('/api/reset', { confirm: true });
      render(data);
      if (data.reset) {
        toast('تم إعادة تعيين العدادات بنجاح', 'reset');
      }
    };

    buttons.forEach((button) => {
      button.form.addEventListener('submit', (event) => {
        event.preventDefault();
        increment(button).catch((err) => setStatus(err.message, 'error'));
      });
      button.addEventListener('touchstart', (event) => {
        event.preventDefault();
        increment(button).catch((err) => setStatus(err.message, 'error'));
      });
    });

    resetForm.addEventListener('submit', (event) => {
      event.preventDefault();
      resetCounters().catch((err) => setStatus(err.message, 'error'));
    });

    document.addEventListener('keydown', (event) => {
      if (event.ctrlKey && event.key === 'r') {
        event.preventDefault();
        resetCounters().catch((err) => setStatus(err.message, 'error'));
        return;
      }
      const button = buttons.find((btn) => btn.dataset.shortcut === event.key);
      if (button && !event.ctrlKey && !event.metaKey && !event.altKey) {
        increment(button).catch((err) => setStatus(err.message, 'error'));
      }
    });

    copyBtn.addEventListener('click', () => {
      const url = copyBtn.dataset.url || window.location.href;
      const fallback = () => {
        const area = document.createElement('textarea');
        area.value = url;
        document.body.appendChild(area);
        area.select();
        document.execCommand('copy');
        document.body.removeChild(area);
        toast('تم نسخ الرابط بنجاح', 'copy');
      };
      if (!navigator.clipboard) {
        fallback();
        return;
      }
      navigator.clipboard.writeText(url).then(() => toast('تم نسخ الرابط بنجاح', 'copy')).catch(fallback);
    });

    setTimeout(() => document.body.classList.add('loaded'), 100);
  </script>
</body>
</html>
"#;
