use crate::models::Snapshot;

pub fn render_index(snapshot: &Snapshot) -> String {
    INDEX_HTML
        .replace("{{DISPLAY_DATE}}", &snapshot.display_date)
        .replace("{{COUNT}}", &snapshot.count.to_string())
        .replace("{{TARGET}}", &snapshot.target.to_string())
        .replace("{{SUB_DISABLED}}", if snapshot.can_decrement { "" } else { "disabled" })
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Target</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #24302f;
      --muted: #6b716f;
      --card: #ffffff;
      --accent: #2f7d6d;
      --success: #2e9b57;
      --danger: #c8483a;
      --border: #d8d4cb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(520px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: 0 18px 40px rgba(36, 48, 47, 0.12);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .date {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .counter {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 24px;
    }

    .counter button {
      width: 56px;
      height: 56px;
      border-radius: 50%;
      border: none;
      background: var(--accent);
      color: #fff;
      font-size: 1.6rem;
      cursor: pointer;
    }

    .counter button:disabled {
      opacity: 0.35;
      cursor: not-allowed;
    }

    .count {
      font-size: 3.4rem;
      font-weight: 700;
      min-width: 96px;
      text-align: center;
    }

    .progress {
      text-align: center;
      margin: 0;
    }

    .progress.goal-reached {
      color: var(--success);
      font-weight: 600;
    }

    .target {
      display: flex;
      gap: 10px;
    }

    .target input {
      flex: 1;
      padding: 10px 12px;
      border: 2px solid var(--border);
      border-radius: 10px;
      font-size: 1rem;
      transition: border-color 200ms ease;
    }

    .target button {
      padding: 10px 16px;
      border: none;
      border-radius: 10px;
      background: var(--ink);
      color: #fff;
      cursor: pointer;
    }

    .history {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .history li {
      display: flex;
      justify-content: space-between;
      padding: 8px 12px;
      border-radius: 8px;
      background: var(--bg);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Target</h1>
      <p class="date" id="date">{{DISPLAY_DATE}}</p>
    </header>

    <section class="counter">
      <form method="post" action="/click/sub" id="sub-form">
        <button type="submit" id="sub-btn" aria-label="Decrement" {{SUB_DISABLED}}>-</button>
      </form>
      <span class="count" id="count">{{COUNT}}</span>
      <form method="post" action="/click/add" id="add-form">
        <button type="submit" aria-label="Increment">+</button>
      </form>
    </section>

    <p class="progress" id="progress"></p>

    <form class="target" id="target-form">
      <input type="number" min="1" id="target-input" value="{{TARGET}}" aria-label="Daily target" />
      <button type="submit">Set target</button>
    </form>

    <section>
      <h2>History</h2>
      <ul class="history" id="history"></ul>
    </section>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const countEl = document.getElementById('count');
    const subBtn = document.getElementById('sub-btn');
    const progressEl = document.getElementById('progress');
    const targetInput = document.getElementById('target-input');
    const historyEl = document.getElementById('history');

    const render = (data) => {
      dateEl.textContent = data.display_date;
      countEl.textContent = data.count;
      subBtn.disabled = !data.can_decrement;

      progressEl.classList.toggle('goal-reached', data.goal_reached);
      if (data.remaining === null) {
        progressEl.textContent = 'Set a daily target to track progress.';
      } else if (data.goal_reached) {
        progressEl.textContent = "You've reached your daily goal! Great job!";
      } else {
        progressEl.textContent = `${data.remaining} more to reach your goal of ${data.target}.`;
      }

      historyEl.replaceChildren();
      if (data.history.length === 0) {
        const empty = document.createElement('li');
        empty.textContent = 'No history yet.';
        historyEl.appendChild(empty);
        return;
      }
      for (const entry of data.history) {
        const item = document.createElement('li');
        const label = document.createElement('span');
        const count = document.createElement('strong');
        label.textContent = entry.label;
        count.textContent = entry.count;
        item.append(label, count);
        historyEl.appendChild(item);
      }
    };

    const flash = (color) => {
      targetInput.style.borderColor = color;
      setTimeout(() => { targetInput.style.borderColor = ''; }, 2000);
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const bindClick = (formId, action) => {
      document.getElementById(formId).addEventListener('submit', (event) => {
        event.preventDefault();
        post('/api/click', { action }).then(render).catch(console.error);
      });
    };

    bindClick('add-form', 'add');
    bindClick('sub-form', 'sub');

    document.getElementById('target-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/target', { value: targetInput.value })
        .then((res) => {
          flash(res.accepted ? 'var(--success)' : 'var(--danger)');
          render(res.snapshot);
        })
        .catch(console.error);
    });

    fetch('/api/state').then((res) => res.json()).then(render).catch(console.error);
  </script>
</body>
</html>
"#;
