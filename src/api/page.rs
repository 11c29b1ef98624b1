/// Registration page: a form posting to `/api/users` and a table refreshed
/// from the list endpoint after every submission.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>User Registry</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 800px; margin: 2rem auto; padding: 1rem; }
        h1 { color: #333; }
        form, table { background: #f0f0f0; border-radius: 4px; padding: 1rem; margin-bottom: 1.5rem; }
        label { display: block; margin-top: 0.5rem; }
        input { width: 100%; padding: 0.4rem; box-sizing: border-box; }
        button { margin-top: 1rem; padding: 0.5rem 1rem; }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 0.4rem; border-bottom: 1px solid #ddd; }
        #message { min-height: 1.5rem; }
        .list-header { display: flex; justify-content: space-between; align-items: center; }
        #empty { color: #666; font-style: italic; }
    </style>
</head>
<body>
    <h1>User Registry</h1>
    <form id="register">
        <label for="name">Name</label>
        <input id="name" name="name" required>
        <label for="email">Email</label>
        <input id="email" name="email" type="email" required>
        <button id="submit" type="submit">Register</button>
    </form>
    <p id="message"></p>
    <div class="list-header">
        <h2>Registered users (<span id="count">0</span>)</h2>
        <button id="refresh" type="button">Refresh</button>
    </div>
    <p id="empty">No users registered yet.</p>
    <table id="table" hidden>
        <thead><tr><th>ID</th><th>Name</th><th>Email</th></tr></thead>
        <tbody id="users"></tbody>
    </table>
    <script>
        const form = document.getElementById("register");
        const message = document.getElementById("message");
        const submit = document.getElementById("submit");

        async function fetchUsers() {
            try {
                const response = await fetch("/api/users");
                const users = await response.json();
                const rows = document.getElementById("users");
                document.getElementById("count").textContent = users.length;
                document.getElementById("empty").hidden = users.length > 0;
                document.getElementById("table").hidden = users.length === 0;
                rows.replaceChildren(...users.map((user) => {
                    const row = document.createElement("tr");
                    for (const value of [user.id, user.name, user.email]) {
                        const cell = document.createElement("td");
                        cell.textContent = value;
                        row.appendChild(cell);
                    }
                    return row;
                }));
            } catch (error) {
                console.error("Error fetching users:", error);
            }
        }

        form.addEventListener("submit", async (event) => {
            event.preventDefault();
            submit.disabled = true;
            message.textContent = "";
            try {
                const response = await fetch("/api/users", {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify({
                        name: form.elements.name.value,
                        email: form.elements.email.value,
                    }),
                });
                const data = await response.json();
                if (!response.ok) {
                    throw new Error(data.message);
                }
                message.textContent = data.message;
                form.reset();
                fetchUsers();
            } catch (error) {
                message.textContent = "error creating user";
            } finally {
                submit.disabled = false;
            }
        });

        document.getElementById("refresh").addEventListener("click", fetchUsers);

        fetchUsers();
    </script>
</body>
</html>
"#;
